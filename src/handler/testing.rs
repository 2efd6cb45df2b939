//! Test-data reset endpoint

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::database::AppState;

/// Empties every store so test suites start from a known state
#[utoipa::path(
    delete,
    path = "/api/testing/all-data",
    tag = "testing",
    responses((status = 204, description = "All data removed"))
)]
pub async fn clear_all_data(State(state): State<AppState>) -> StatusCode {
    state.db.write().await.clear_all();
    info!("all data cleared");
    StatusCode::NO_CONTENT
}
