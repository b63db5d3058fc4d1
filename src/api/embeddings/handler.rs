// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/embeddings HTTP handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::info;

use super::EmbeddingResponse;
use crate::api::http_server::AppState;
use crate::api::upload::read_upload;
use crate::api::ApiError;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// POST /api/embeddings handler
///
/// # Request
/// `multipart/form-data` with a file field named `image`. The bytes are
/// passed to the configured `FaceEmbedder` without validation.
///
/// # Response Body
/// ```json
/// { "vector": [0.1, 0.2, ...] }
/// ```
///
/// # Errors
/// - 400 Bad Request: body is not a readable multipart upload
/// - 413 Payload Too Large: upload exceeds `max_upload_bytes`
/// - 422 Unprocessable Entity: no `image` field
/// - 500 Internal Server Error: embedder failed or returned a wrong-sized vector
pub async fn embeddings_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<EmbeddingResponse>, ApiError> {
    let image = read_upload(multipart, IMAGE_FIELD, state.config.max_upload_bytes).await?;

    let embedder = &state.face_embedder;
    let vector = embedder.embed(&image).await.map_err(|e| {
        ApiError::InternalError(format!("embedding with {} failed: {}", embedder.name(), e))
    })?;

    if vector.len() != embedder.dimensions() {
        return Err(ApiError::InternalError(format!(
            "{} returned {} values, expected {}",
            embedder.name(),
            vector.len(),
            embedder.dimensions()
        )));
    }

    info!(
        "Embedding generated by {}: {} byte image -> {} dimensions",
        embedder.name(),
        image.len(),
        vector.len()
    );

    Ok(Json(EmbeddingResponse::new(vector)))
}
