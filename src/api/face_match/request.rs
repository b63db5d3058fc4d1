// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Match request type

use serde::{Deserialize, Serialize};

use crate::embeddings::DEFAULT_MATCH_THRESHOLD;

fn default_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

/// Request body for POST /api/match
///
/// # Example
/// ```json
/// { "reference": [0.1, 0.2], "probe": [0.1, 0.25], "threshold": 0.6 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Descriptor of the enrolled face (e.g. ID photo)
    pub reference: Vec<f64>,

    /// Descriptor of the face being verified
    pub probe: Vec<f64>,

    /// Maximum distance still considered a match
    /// Default: 0.6
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}
