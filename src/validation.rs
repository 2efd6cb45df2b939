//! Input validation for driver and video payloads
//!
//! Validators inspect the raw JSON record rather than a typed struct, so a
//! wrong type (a number where a string belongs, a string where a boolean
//! belongs) is reported as a field error instead of a deserialization fault.
//! Every field is checked; errors accumulate in field order.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{ValidateEmail, ValidateLength};

use crate::error::{ApiError, FieldError};
use crate::model::{DriverAttributes, ResourceType, Resolution, VehicleFeature, VideoInput};

const NAME_MIN: u64 = 2;
const NAME_MAX: u64 = 50;
const TITLE_MAX: u64 = 40;
const AUTHOR_MAX: u64 = 20;
const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 18;

/// Checks a driver `attributes` record.
pub fn driver_input_errors(attributes: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match non_blank(&attributes["name"]) {
        Some(name) if name.validate_length(Some(NAME_MIN), Some(NAME_MAX), None) => {}
        _ => errors.push(FieldError::new(
            "name",
            format!("Name must be {NAME_MIN}-{NAME_MAX} characters long"),
        )),
    }

    if non_blank(&attributes["phoneNumber"]).is_none() {
        errors.push(FieldError::new("phoneNumber", "Invalid phoneNumber"));
    }

    if !attributes["email"]
        .as_str()
        .is_some_and(|email| email.validate_email())
    {
        errors.push(FieldError::new("email", "Invalid email"));
    }

    for field in ["vehicleMake", "vehicleModel"] {
        if non_blank(&attributes[field]).is_none() {
            errors.push(FieldError::new(field, format!("Invalid {field}")));
        }
    }

    if attributes["vehicleYear"].as_i64().is_none() {
        errors.push(FieldError::new("vehicleYear", "vehicleYear must be a number"));
    }

    if non_blank(&attributes["vehicleLicensePlate"]).is_none() {
        errors.push(FieldError::new(
            "vehicleLicensePlate",
            "Invalid vehicleLicensePlate",
        ));
    }

    if !matches!(attributes["vehicleDescription"], Value::Null | Value::String(_)) {
        errors.push(FieldError::new(
            "vehicleDescription",
            "vehicleDescription must be a string or null",
        ));
    }

    match &attributes["vehicleFeatures"] {
        Value::Null => {}
        value if all_tags(value, |tag| VehicleFeature::from_tag(tag).is_some()) => {}
        _ => errors.push(FieldError::new(
            "vehicleFeatures",
            "vehicleFeatures must only contain wi-fi, child-seat or pet-friendly",
        )),
    }

    errors
}

/// Checks a video record.
pub fn video_input_errors(input: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !input["title"]
        .as_str()
        .is_some_and(|title| title.validate_length(Some(1), Some(TITLE_MAX), None))
    {
        errors.push(FieldError::new("title", "Invalid title"));
    }

    if !input["author"]
        .as_str()
        .is_some_and(|author| author.validate_length(Some(1), Some(AUTHOR_MAX), None))
    {
        errors.push(FieldError::new("author", "Invalid author"));
    }

    if !all_tags(&input["availableResolutions"], |tag| {
        Resolution::from_tag(tag).is_some()
    }) {
        errors.push(FieldError::new(
            "availableResolutions",
            "Invalid availableResolutions",
        ));
    }

    if !input["canBeDownloaded"].is_boolean() {
        errors.push(FieldError::new(
            "canBeDownloaded",
            "canBeDownloaded must be boolean",
        ));
    }

    // Only an explicit null opts out; a missing key is rejected.
    let age_ok = match input.get("minAgeRestriction") {
        Some(Value::Null) => true,
        Some(value) => value
            .as_i64()
            .is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age)),
        None => false,
    };
    if !age_ok {
        errors.push(FieldError::new(
            "minAgeRestriction",
            "minAgeRestriction must be null or number 1-18",
        ));
    }

    if !input["publicationDate"].as_str().is_some_and(is_date) {
        errors.push(FieldError::new(
            "publicationDate",
            "publicationDate must be a valid ISO date string",
        ));
    }

    errors
}

/// Validates and converts a driver `attributes` record.
pub fn parse_driver_attributes(attributes: &Value) -> Result<DriverAttributes, ApiError> {
    parse_checked(ResourceType::Drivers, attributes, driver_input_errors)
}

/// Validates and converts a video record.
pub fn parse_video_input(input: &Value) -> Result<VideoInput, ApiError> {
    parse_checked(ResourceType::Videos, input, video_input_errors)
}

fn parse_checked<T, F>(resource: ResourceType, raw: &Value, check: F) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: Fn(&Value) -> Vec<FieldError>,
{
    let errors = check(raw);
    if !errors.is_empty() {
        return Err(ApiError::Validation { resource, errors });
    }

    T::deserialize(raw).map_err(|err| ApiError::Validation {
        resource,
        errors: vec![FieldError::new("body", err.to_string())],
    })
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// True when `value` is an array of strings that all satisfy `known`.
fn all_tags<F>(value: &Value, known: F) -> bool
where
    F: Fn(&str) -> bool,
{
    value
        .as_array()
        .is_some_and(|items| items.iter().all(|item| item.as_str().is_some_and(&known)))
}

fn is_date(candidate: &str) -> bool {
    DateTime::parse_from_rfc3339(candidate).is_ok()
        || NaiveDateTime::parse_from_str(candidate, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(candidate, "%Y-%m-%d").is_ok()
}
