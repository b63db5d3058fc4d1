// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Match endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use super::{MatchRequest, MatchResponse};
use crate::api::{ApiError, AppState};
use crate::embeddings::compare_descriptors;

/// POST /api/match - Compare two face descriptors
///
/// # Request
/// - `reference`: enrolled descriptor (required)
/// - `probe`: descriptor to verify, same length as `reference` (required)
/// - `threshold`: match cut-off, defaults to 0.6
///
/// # Response
/// - `distance`: Euclidean distance
/// - `isMatch`: `distance < threshold`
/// - `threshold`: threshold used
///
/// # Errors
/// - 400 Bad Request: unparsable JSON, empty or mismatched descriptors,
///   non-finite values, non-positive threshold
/// - 413 Payload Too Large: body over `max_upload_bytes`
/// - 415 Unsupported Media Type: missing or non-JSON `Content-Type`
pub async fn match_handler(
    State(state): State<AppState>,
    request: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, ApiError> {
    let Json(request) = request.map_err(|rejection| json_error(rejection, &state))?;
    debug!(
        "Match request: {} dimensions, threshold {}",
        request.reference.len(),
        request.threshold
    );

    let outcome = compare_descriptors(&request.reference, &request.probe, request.threshold)?;

    info!(
        "Descriptor match: distance {:.4} (threshold {}) -> {}",
        outcome.distance,
        outcome.threshold,
        if outcome.is_match { "match" } else { "no match" }
    );

    Ok(Json(MatchResponse::from(outcome)))
}

fn json_error(rejection: JsonRejection, state: &AppState) -> ApiError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge {
            limit: state.config.max_upload_bytes,
        },
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ApiError::UnsupportedMediaType(rejection.body_text()),
        _ => ApiError::InvalidRequest(rejection.body_text()),
    }
}
