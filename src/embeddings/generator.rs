// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Placeholder face embedding generator
//!
//! Produces a 512-dimensional descriptor of uniform random values in `[0, 1)`.
//! The image bytes are accepted but not inspected.

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

/// Length of every face descriptor (ArcFace output size)
pub const EMBEDDING_DIMENSIONS: usize = 512;

/// Produces a face descriptor from raw image bytes.
///
/// Implementations must return exactly [`FaceEmbedder::dimensions`] values.
#[async_trait]
pub trait FaceEmbedder: Send + Sync {
    /// Model identifier used in logs
    fn name(&self) -> &str;

    /// Descriptor length produced by this embedder
    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSIONS
    }

    /// Generates a descriptor for the uploaded image
    async fn embed(&self, image: &[u8]) -> Result<Vec<f64>>;
}

/// Returns `EMBEDDING_DIMENSIONS` uniform samples from `[0, 1)`.
///
/// The input is unused until a real recognition graph replaces this.
pub fn generate_face_embedding(_image: &[u8]) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..EMBEDDING_DIMENSIONS).map(|_| rng.gen::<f64>()).collect()
}

/// `FaceEmbedder` backed by [`generate_face_embedding`]
#[derive(Debug, Clone, Default)]
pub struct RandomEmbedder;

impl RandomEmbedder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FaceEmbedder for RandomEmbedder {
    fn name(&self) -> &str {
        "random-placeholder"
    }

    async fn embed(&self, image: &[u8]) -> Result<Vec<f64>> {
        debug!("Generating placeholder embedding for {} byte image", image.len());
        Ok(generate_face_embedding(image))
    }
}
