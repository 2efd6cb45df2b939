//! Handlers for `/api/videos`
//!
//! Videos are sent and returned as plain records, without an envelope.
//! Rejected input is reported under `errorsMessages`; unknown ids under
//! `errorMessages`, like the drivers API.

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
use crate::error::{ApiError, ErrorMessages, ErrorsMessages};
use crate::mapper::{map_to_video_list_output, map_to_video_output};
use crate::model::{ResourceType, Video, VideoInput};
use crate::validation::parse_video_input;

fn not_found(id: String) -> ApiError {
    ApiError::NotFound {
        resource: ResourceType::Videos,
        id,
    }
}

#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses((status = 200, body = Vec<Video>))
)]
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<Video>> {
    let db = state.db.read().await;
    debug!(count = db.videos.len(), "listing videos");
    Json(map_to_video_list_output(db.videos.all()))
}

#[utoipa::path(
    get,
    path = "/api/videos/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Video id")),
    responses(
        (status = 200, body = Video),
        (status = 404, body = ErrorMessages)
    )
)]
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    let db = state.db.read().await;
    let video = parse_id(&id)
        .and_then(|key| db.videos.find_by_id(key))
        .ok_or_else(|| not_found(id))?;

    Ok(Json(map_to_video_output(video)))
}

/// Creates a video
///
/// The new id is the collection length plus one, moved past the current
/// maximum only if deletions left a live row holding that number.
#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body = VideoInput,
    responses(
        (status = 201, body = Video),
        (status = 400, body = ErrorsMessages)
    )
)]
pub async fn create_video(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let input = parse_video_input(&body)
        .inspect_err(|err| warn!(error = %err, "rejected video create"))?;

    let mut db = state.db.write().await;
    let video = Video {
        id: db.next_video_id(),
        title: input.title,
        author: input.author,
        can_be_downloaded: input.can_be_downloaded,
        min_age_restriction: input.min_age_restriction,
        created_at: Utc::now(),
        publication_date: input.publication_date,
        available_resolutions: input.available_resolutions,
    };
    let output = map_to_video_output(&video);
    db.videos.append(video);

    info!(id = output.id, "video created");
    Ok((StatusCode::CREATED, Json(output)))
}

/// Replaces every mutable field of a video, keeping `id` and `createdAt`
#[utoipa::path(
    put,
    path = "/api/videos/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Video id")),
    request_body = VideoInput,
    responses(
        (status = 204, description = "Video replaced"),
        (status = 400, body = ErrorsMessages),
        (status = 404, body = ErrorMessages)
    )
)]
pub async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let mut db = state.db.write().await;
    let index = parse_id(&id)
        .and_then(|key| db.videos.find_index_by_id(key))
        .ok_or_else(|| not_found(id.clone()))?;

    let VideoInput {
        title,
        author,
        can_be_downloaded,
        min_age_restriction,
        publication_date,
        available_resolutions,
    } = parse_video_input(&body)
        .inspect_err(|err| warn!(%id, error = %err, "rejected video update"))?;

    let video = db.videos.get_mut(index).ok_or_else(|| not_found(id.clone()))?;
    video.title = title;
    video.author = author;
    video.can_be_downloaded = can_be_downloaded;
    video.min_age_restriction = min_age_restriction;
    video.publication_date = publication_date;
    video.available_resolutions = available_resolutions;

    info!(%id, "video updated");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Video id")),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 404, body = ErrorMessages)
    )
)]
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut db = state.db.write().await;
    let index = parse_id(&id)
        .and_then(|key| db.videos.find_index_by_id(key))
        .ok_or_else(|| not_found(id.clone()))?;

    db.videos.remove_at(index);

    info!(%id, "video deleted");
    Ok(StatusCode::NO_CONTENT)
}
