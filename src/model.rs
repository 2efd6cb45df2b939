//! Data models for the drivers and videos API
//!
//! This module defines the stored entities, the enumerations their fields are
//! checked against, and the request/response shapes exchanged over HTTP.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Resource discriminator carried in envelopes and error bodies
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Drivers,
    Videos,
}

impl ResourceType {
    /// Human readable name used in "not found" messages.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Drivers => "Driver",
            Self::Videos => "Video",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drivers => f.write_str("drivers"),
            Self::Videos => f.write_str("videos"),
        }
    }
}

/// Optional extras a driver's vehicle can offer
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum VehicleFeature {
    #[serde(rename = "wi-fi")]
    WiFi,
    #[serde(rename = "child-seat")]
    ChildSeat,
    #[serde(rename = "pet-friendly")]
    PetFriendly,
}

impl VehicleFeature {
    pub const ALL: [Self; 3] = [Self::WiFi, Self::ChildSeat, Self::PetFriendly];

    pub fn tag(self) -> &'static str {
        match self {
            Self::WiFi => "wi-fi",
            Self::ChildSeat => "child-seat",
            Self::PetFriendly => "pet-friendly",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.tag() == tag)
    }
}

/// Video resolutions a client may request
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    pub const ALL: [Self; 8] = [
        Self::P144,
        Self::P240,
        Self::P360,
        Self::P480,
        Self::P720,
        Self::P1080,
        Self::P1440,
        Self::P2160,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::P144 => "P144",
            Self::P240 => "P240",
            Self::P360 => "P360",
            Self::P480 => "P480",
            Self::P720 => "P720",
            Self::P1080 => "P1080",
            Self::P1440 => "P1440",
            Self::P2160 => "P2160",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resolution| resolution.tag() == tag)
    }
}

/// Business fields of a driver, replaced as a whole on update
///
/// Responses always carry every field: an omitted description reads back as
/// `null` and omitted features as `[]`.
///
/// # Example
/// ```json
/// {
///   "name": "Valentin",
///   "phoneNumber": "123-456-7890",
///   "email": "valentin@example.com",
///   "vehicleMake": "BMW",
///   "vehicleModel": "X5",
///   "vehicleYear": 2021,
///   "vehicleLicensePlate": "ABC-123",
///   "vehicleDescription": null,
///   "vehicleFeatures": ["child-seat"]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverAttributes {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i64,
    pub vehicle_license_plate: String,

    /// Free text, `null` when the driver gave none
    #[serde(default)]
    pub vehicle_description: Option<String>,

    /// Absent and `null` both mean "no features"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vehicle_features: Vec<VehicleFeature>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Driver as held in the store
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i64,
    pub attributes: DriverAttributes,
    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST /api/drivers`
#[derive(Deserialize, Debug, ToSchema)]
pub struct DriverCreateInput {
    pub data: DriverCreateData,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DriverCreateData {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub attributes: DriverAttributes,
}

/// Request payload for `PUT /api/drivers/{id}`
#[derive(Deserialize, Debug, ToSchema)]
pub struct DriverUpdateInput {
    pub data: DriverUpdateData,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DriverUpdateData {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub attributes: DriverAttributes,
}

/// Resource envelope returned for a single driver
///
/// # Example
/// ```json
/// { "type": "drivers", "id": "1705501234567", "attributes": { "name": "Valentin", ... } }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DriverOutput {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub id: String,
    pub attributes: DriverAttributes,
}

/// Always serialized as `{}`
#[derive(Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct ListMeta {}

/// Envelope returned by `GET /api/drivers`
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DriverListOutput {
    pub meta: ListMeta,
    pub data: Vec<DriverOutput>,
}

/// Video as held in the store and as returned to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub publication_date: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Request payload for creating or replacing a video
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoInput {
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i64>,
    pub publication_date: String,
    pub available_resolutions: Vec<Resolution>,
}
