// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Liveness API endpoint module
//!
//! Provides POST /api/liveness for scoring an uploaded video.

pub mod handler;
pub mod response;

pub use handler::{liveness_handler, VIDEO_FIELD};
pub use response::DetectionResponse;
