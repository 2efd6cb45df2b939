//! Handlers for `/api/drivers`
//!
//! Drivers travel inside a resource envelope: requests carry
//! `{ "data": { "type", "attributes" } }` and responses the mapped
//! `{ "type", "id", "attributes" }` record.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::parse_id;
use crate::database::AppState;
use crate::error::{ApiError, ErrorMessages};
use crate::mapper::{map_to_driver_list_output, map_to_driver_output};
use crate::model::{
    Driver, DriverCreateInput, DriverListOutput, DriverOutput, DriverUpdateInput, ResourceType,
};
use crate::validation::parse_driver_attributes;

fn not_found(id: String) -> ApiError {
    ApiError::NotFound {
        resource: ResourceType::Drivers,
        id,
    }
}

fn attributes_of(body: &Value) -> &Value {
    &body["data"]["attributes"]
}

/// Lists every driver in insertion order
#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = "drivers",
    responses((status = 200, body = DriverListOutput))
)]
pub async fn list_drivers(State(state): State<AppState>) -> Json<DriverListOutput> {
    let db = state.db.read().await;
    debug!(count = db.drivers.len(), "listing drivers");
    Json(map_to_driver_list_output(db.drivers.all()))
}

/// Returns a single driver
///
/// - **200 OK** - Driver envelope
/// - **404 Not Found** - `{ "errorMessages": [{ "field": "id", ... }] }`
#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    tag = "drivers",
    params(("id" = String, Path, description = "Driver id")),
    responses(
        (status = 200, body = DriverOutput),
        (status = 404, body = ErrorMessages)
    )
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverOutput>, ApiError> {
    let db = state.db.read().await;
    let driver = parse_id(&id)
        .and_then(|key| db.drivers.find_by_id(key))
        .ok_or_else(|| not_found(id))?;

    Ok(Json(map_to_driver_output(driver)))
}

/// Creates a driver
///
/// The id and creation timestamp are assigned here. A body with any invalid
/// field is rejected with the complete list of errors and nothing is stored.
#[utoipa::path(
    post,
    path = "/api/drivers",
    tag = "drivers",
    request_body = DriverCreateInput,
    responses(
        (status = 201, body = DriverOutput),
        (status = 400, body = ErrorMessages)
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<DriverOutput>), ApiError> {
    let attributes = parse_driver_attributes(attributes_of(&body))
        .inspect_err(|err| warn!(error = %err, "rejected driver create"))?;

    let mut db = state.db.write().await;
    let created_at = Utc::now();
    let driver = Driver {
        id: db.next_driver_id(created_at),
        attributes,
        created_at,
    };
    let output = map_to_driver_output(&driver);
    db.drivers.append(driver);

    info!(id = %output.id, "driver created");
    Ok((StatusCode::CREATED, Json(output)))
}

/// Replaces every attribute of an existing driver
///
/// An unknown id is reported before the body is validated. `id` and
/// `createdAt` never change.
#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    tag = "drivers",
    params(("id" = String, Path, description = "Driver id")),
    request_body = DriverUpdateInput,
    responses(
        (status = 204, description = "Driver replaced"),
        (status = 400, body = ErrorMessages),
        (status = 404, body = ErrorMessages)
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let mut db = state.db.write().await;
    let index = parse_id(&id)
        .and_then(|key| db.drivers.find_index_by_id(key))
        .ok_or_else(|| not_found(id.clone()))?;

    let attributes = parse_driver_attributes(attributes_of(&body))
        .inspect_err(|err| warn!(%id, error = %err, "rejected driver update"))?;

    let driver = db.drivers.get_mut(index).ok_or_else(|| not_found(id.clone()))?;
    driver.attributes = attributes;

    info!(%id, "driver updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a driver
#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    tag = "drivers",
    params(("id" = String, Path, description = "Driver id")),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 404, body = ErrorMessages)
    )
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut db = state.db.write().await;
    let index = parse_id(&id)
        .and_then(|key| db.drivers.find_index_by_id(key))
        .ok_or_else(|| not_found(id.clone()))?;

    db.drivers.remove_at(index);

    info!(%id, "driver deleted");
    Ok(StatusCode::NO_CONTENT)
}
