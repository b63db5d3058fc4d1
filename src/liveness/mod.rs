// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Liveness detection module
//!
//! `LivenessDetector` is the seam used by POST /api/liveness. The only
//! implementation today is a byte-length heuristic standing in for real
//! motion, illumination and depth analysis.

pub mod heuristic;

pub use heuristic::{
    run_liveness_check, ByteLengthHeuristic, HeuristicScores, LivenessDetector, LivenessLabel,
    LivenessVerdict, LIVE_THRESHOLD, MAX_SCORE, SATURATION_BYTES,
};
