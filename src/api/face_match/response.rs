// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Match response type

use serde::{Deserialize, Serialize};

use crate::embeddings::MatchOutcome;

/// Response body for POST /api/match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    /// Euclidean distance between the two descriptors
    pub distance: f64,

    /// `distance < threshold`
    pub is_match: bool,

    /// Threshold the decision was made against
    pub threshold: f64,
}

impl From<MatchOutcome> for MatchResponse {
    fn from(outcome: MatchOutcome) -> Self {
        Self {
            distance: outcome.distance,
            is_match: outcome.is_match,
            threshold: outcome.threshold,
        }
    }
}
