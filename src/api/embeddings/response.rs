// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingResponse type for POST /api/embeddings

use serde::{Deserialize, Serialize};

/// Response body for POST /api/embeddings
///
/// # Example
/// ```json
/// { "vector": [0.12, 0.87, ...] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingResponse {
    /// Face descriptor, 512 values in `[0, 1)` for the placeholder embedder
    pub vector: Vec<f64>,
}

impl EmbeddingResponse {
    pub fn new(vector: Vec<f64>) -> Self {
        Self { vector }
    }
}
