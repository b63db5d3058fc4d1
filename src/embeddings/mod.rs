// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Face embedding module
//!
//! This module provides:
//! - The `FaceEmbedder` seam used by POST /api/embeddings
//! - A random placeholder embedder until an ONNX ArcFace graph is wired in
//! - Descriptor comparison (Euclidean distance) used by POST /api/match

pub mod distance;
pub mod generator;

pub use distance::{
    compare_descriptors, DescriptorError, MatchOutcome,
    DEFAULT_MATCH_THRESHOLD,
};
pub use generator::{generate_face_embedding, FaceEmbedder, RandomEmbedder, EMBEDDING_DIMENSIONS};
