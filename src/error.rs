//! Error types returned by the request handlers
//!
//! Every failure a handler can produce is either a validation failure (400)
//! or a missing record (404). Both render as a JSON list of field errors.
//! Video validation failures use the `errorsMessages` key; everything else
//! uses `errorMessages`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::model::ResourceType;

/// A single field-level complaint about an input record
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error list body for driver errors and for every 404
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessages {
    pub error_messages: Vec<FieldError>,
}

/// Error list body for rejected video input
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorsMessages {
    pub errors_messages: Vec<FieldError>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{resource} input rejected with {} error(s)", .errors.len())]
    Validation {
        resource: ResourceType,
        errors: Vec<FieldError>,
    },

    #[error("{resource} {id} not found")]
    NotFound { resource: ResourceType, id: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Validation { errors, .. } => errors.clone(),
            Self::NotFound { resource, .. } => vec![FieldError::new(
                "id",
                format!("{} not found", resource.singular()),
            )],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = self.field_errors();
        match self {
            Self::Validation {
                resource: ResourceType::Videos,
                ..
            } => (
                status,
                Json(ErrorsMessages {
                    errors_messages: errors,
                }),
            )
                .into_response(),
            _ => (
                status,
                Json(ErrorMessages {
                    error_messages: errors,
                }),
            )
                .into_response(),
        }
    }
}
