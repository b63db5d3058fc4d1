// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Byte-length liveness heuristic
//!
//! `score = min(0.99, len / 10_000_000)`; the label is `live` only when the
//! score is strictly above 0.5. Sub-scores are fixed fractions of the score
//! (motion 0.6, illumination 0.3, depth 0.1).

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Upload size at which the score reaches 1.0 before clamping
pub const SATURATION_BYTES: usize = 10_000_000;

/// Upper clamp for the confidence score
pub const MAX_SCORE: f64 = 0.99;

/// Scores strictly above this are labelled live
pub const LIVE_THRESHOLD: f64 = 0.5;

const MOTION_WEIGHT: f64 = 0.6;
const ILLUMINATION_WEIGHT: f64 = 0.3;
const DEPTH_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LivenessLabel {
    Live,
    Spoof,
}

impl LivenessLabel {
    pub fn from_score(score: f64) -> Self {
        if score > LIVE_THRESHOLD {
            LivenessLabel::Live
        } else {
            LivenessLabel::Spoof
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LivenessLabel::Live => "live",
            LivenessLabel::Spoof => "spoof",
        }
    }
}

impl fmt::Display for LivenessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named contributions to the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicScores {
    pub motion: f64,
    pub illumination: f64,
    pub depth: f64,
}

impl HeuristicScores {
    fn split(score: f64) -> Self {
        Self {
            motion: score * MOTION_WEIGHT,
            illumination: score * ILLUMINATION_WEIGHT,
            depth: score * DEPTH_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivenessVerdict {
    /// Confidence in `[0, MAX_SCORE]`
    pub score: f64,
    pub label: LivenessLabel,
    pub heuristics: HeuristicScores,
}

/// Decides whether an uploaded video shows a live person.
#[async_trait]
pub trait LivenessDetector: Send + Sync {
    /// Detector identifier used in logs
    fn name(&self) -> &str;

    async fn detect(&self, video: &[u8]) -> Result<LivenessVerdict>;
}

/// Computes the placeholder verdict from the upload length alone.
pub fn run_liveness_check(video: &[u8]) -> LivenessVerdict {
    let score = (video.len() as f64 / SATURATION_BYTES as f64).min(MAX_SCORE);

    LivenessVerdict {
        score,
        label: LivenessLabel::from_score(score),
        heuristics: HeuristicScores::split(score),
    }
}

/// `LivenessDetector` backed by [`run_liveness_check`]
#[derive(Debug, Clone, Default)]
pub struct ByteLengthHeuristic;

impl ByteLengthHeuristic {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LivenessDetector for ByteLengthHeuristic {
    fn name(&self) -> &str {
        "byte-length-heuristic"
    }

    async fn detect(&self, video: &[u8]) -> Result<LivenessVerdict> {
        let verdict = run_liveness_check(video);
        debug!(
            "Liveness heuristic: {} bytes -> score {:.4} ({})",
            video.len(),
            verdict.score,
            verdict.label
        );
        Ok(verdict)
    }
}
