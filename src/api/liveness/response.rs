// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Liveness response types

use serde::{Deserialize, Serialize};

use crate::liveness::{HeuristicScores, LivenessLabel, LivenessVerdict};

/// Response body for POST /api/liveness
///
/// # Example
/// ```json
/// {
///   "score": 0.42,
///   "label": "spoof",
///   "heuristics": { "motion": 0.252, "illumination": 0.126, "depth": 0.042 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionResponse {
    pub score: f64,
    pub label: LivenessLabel,
    pub heuristics: HeuristicScores,
}

impl From<LivenessVerdict> for DetectionResponse {
    fn from(verdict: LivenessVerdict) -> Self {
        Self {
            score: verdict.score,
            label: verdict.label,
            heuristics: verdict.heuristics,
        }
    }
}
