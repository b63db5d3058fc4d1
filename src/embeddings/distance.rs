// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Face descriptor comparison

use thiserror::Error;

/// Distance below which two descriptors are considered the same face
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

#[derive(Debug, Error, PartialEq)]
pub enum DescriptorError {
    #[error("{0} descriptor is empty")]
    Empty(&'static str),

    #[error("descriptor lengths differ: reference has {reference}, probe has {probe}")]
    LengthMismatch { reference: usize, probe: usize },

    #[error("{field} descriptor contains a non-finite value at index {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("threshold must be a finite positive number (got {0})")]
    InvalidThreshold(f64),
}

impl DescriptorError {
    /// Request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            DescriptorError::Empty(field) => *field,
            DescriptorError::LengthMismatch { .. } => "probe",
            DescriptorError::NonFinite { field, .. } => *field,
            DescriptorError::InvalidThreshold(_) => "threshold",
        }
    }
}

/// Result of comparing two descriptors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome {
    pub distance: f64,
    pub threshold: f64,
    pub is_match: bool,
}

/// Euclidean distance between two descriptors of equal length.
fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Compares `probe` against `reference`; a match is strictly below `threshold`.
pub fn compare_descriptors(
    reference: &[f64],
    probe: &[f64],
    threshold: f64,
) -> Result<MatchOutcome, DescriptorError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(DescriptorError::InvalidThreshold(threshold));
    }
    check_descriptor("reference", reference)?;
    check_descriptor("probe", probe)?;
    if reference.len() != probe.len() {
        return Err(DescriptorError::LengthMismatch {
            reference: reference.len(),
            probe: probe.len(),
        });
    }

    let distance = euclidean_distance(reference, probe);
    Ok(MatchOutcome {
        distance,
        threshold,
        is_match: distance < threshold,
    })
}

fn check_descriptor(field: &'static str, values: &[f64]) -> Result<(), DescriptorError> {
    if values.is_empty() {
        return Err(DescriptorError::Empty(field));
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DescriptorError::NonFinite { field, index });
    }
    Ok(())
}
