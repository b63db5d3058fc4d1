// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod embeddings;
pub mod errors;
pub mod face_match;
pub mod handlers;
pub mod http_server;
pub mod liveness;
pub mod upload;

pub use embeddings::{embeddings_handler, EmbeddingResponse};
pub use errors::{ApiError, ErrorResponse};
pub use face_match::{match_handler, MatchRequest, MatchResponse};
pub use handlers::HealthResponse;
pub use http_server::{create_app, serve, start_server, AppState};
pub use liveness::{liveness_handler, DetectionResponse};
