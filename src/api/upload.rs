// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart upload extraction shared by the image and video endpoints

use axum::http::StatusCode;
use axum_extra::extract::multipart::{Field, Multipart, MultipartError, MultipartRejection};
use bytes::{Bytes, BytesMut};
use tracing::debug;

use super::ApiError;

/// Returns the contents of the first field named `field_name`.
///
/// Other fields are skipped. Upload contents are not inspected; an empty
/// file is a valid upload.
///
/// # Errors
/// - `InvalidRequest` when the body is not multipart or is malformed
/// - `PayloadTooLarge` when the field contents exceed `limit` bytes
/// - `MissingField` when no field with that name is present
pub async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
    field_name: &str,
    limit: usize,
) -> Result<Bytes, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        ApiError::InvalidRequest(format!("expected a multipart upload: {}", rejection.body_text()))
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() == Some(field_name) {
            let file_name = field.file_name().map(str::to_string);
            let bytes = read_field_limited(field, limit).await?;
            debug!(
                "Read multipart field '{}' ({:?}): {} bytes",
                field_name,
                file_name,
                bytes.len()
            );
            return Ok(bytes);
        }

        debug!("Skipping multipart field {:?}", field.name());
    }

    Err(ApiError::MissingField(field_name.to_string()))
}

async fn read_field_limited(mut field: Field, limit: usize) -> Result<Bytes, ApiError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, limit))? {
        if buf.len() + chunk.len() > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

fn multipart_error(err: MultipartError, limit: usize) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { limit }
    } else {
        ApiError::InvalidRequest(err.body_text())
    }
}
