// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Face Embedding API Module
//!
//! This module provides the POST /api/embeddings endpoint, which accepts a
//! multipart image upload and returns a 512-dimensional face descriptor.

pub mod handler;
pub mod response;

pub use handler::{embeddings_handler, IMAGE_FIELD};
pub use response::EmbeddingResponse;
