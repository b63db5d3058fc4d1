// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Liveness endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::info;

use super::DetectionResponse;
use crate::api::http_server::AppState;
use crate::api::upload::read_upload;
use crate::api::ApiError;

/// Multipart field carrying the video
pub const VIDEO_FIELD: &str = "video";

/// POST /api/liveness - Score an uploaded video
///
/// # Request
/// `multipart/form-data` with a file field named `video`.
///
/// # Response
/// - `score`: confidence in `[0, 0.99]`
/// - `label`: `live` when score > 0.5, otherwise `spoof`
/// - `heuristics`: `motion`, `illumination` and `depth` contributions
///
/// # Errors
/// - 400 Bad Request: body is not a readable multipart upload
/// - 413 Payload Too Large: upload exceeds `max_upload_bytes`
/// - 422 Unprocessable Entity: no `video` field
/// - 500 Internal Server Error: detector failed
pub async fn liveness_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DetectionResponse>, ApiError> {
    let video = read_upload(multipart, VIDEO_FIELD, state.config.max_upload_bytes).await?;

    let detector = &state.liveness_detector;
    let verdict = detector.detect(&video).await.map_err(|e| {
        ApiError::InternalError(format!("liveness check with {} failed: {}", detector.name(), e))
    })?;

    info!(
        "Liveness verdict from {}: {} ({:.2}) for {} byte video",
        detector.name(),
        verdict.label,
        verdict.score,
        video.len()
    );

    Ok(Json(DetectionResponse::from(verdict)))
}
