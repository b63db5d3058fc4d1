// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Descriptor match endpoint module
//!
//! Provides POST /api/match for comparing a reference descriptor (e.g. from
//! an ID photo) with a probe descriptor (e.g. from a live capture).

pub mod handler;
pub mod request;
pub mod response;

pub use handler::match_handler;
pub use request::MatchRequest;
pub use response::MatchResponse;
