// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /api/liveness

use axum::http::StatusCode;
use yotouch_ai_service::{
    api::{create_app, AppState},
    config::ServiceConfig,
};

use super::common::{multipart_request, send, Part};

const EPSILON: f64 = 1e-9;

async fn upload_video(state: AppState, len: usize) -> (StatusCode, serde_json::Value) {
    let video = vec![0u8; len];
    send(
        create_app(state),
        multipart_request("/api/liveness", &[Part::file("video", "clip.webm", &video)]),
    )
    .await
}

fn score_of(body: &serde_json::Value) -> f64 {
    body["score"].as_f64().expect("score should be a number")
}

#[tokio::test]
async fn test_half_saturation_is_spoof() {
    let (status, body) = upload_video(AppState::new_for_test(), 5_000_000).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(score_of(&body), 0.5);
    assert_eq!(body["label"], "spoof");
}

#[tokio::test]
async fn test_saturated_upload_is_clamped_and_live() {
    let (status, body) = upload_video(AppState::new_for_test(), 10_000_000).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(score_of(&body), 0.99);
    assert_eq!(body["label"], "live");
}

#[tokio::test]
async fn test_heuristics_are_fixed_fractions() {
    let (status, body) = upload_video(AppState::new_for_test(), 7_500_000).await;

    assert_eq!(status, StatusCode::OK);
    let score = score_of(&body);
    assert!((score - 0.75).abs() < EPSILON);
    assert_eq!(body["label"], "live");

    let heuristics = &body["heuristics"];
    assert!((heuristics["motion"].as_f64().unwrap() - score * 0.6).abs() < EPSILON);
    assert!((heuristics["illumination"].as_f64().unwrap() - score * 0.3).abs() < EPSILON);
    assert!((heuristics["depth"].as_f64().unwrap() - score * 0.1).abs() < EPSILON);
}

#[tokio::test]
async fn test_empty_video_scores_zero() {
    let (status, body) = upload_video(AppState::new_for_test(), 0).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(score_of(&body), 0.0);
    assert_eq!(body["label"], "spoof");
}

#[tokio::test]
async fn test_missing_video_field_is_422() {
    let app = create_app(AppState::new_for_test());

    let (status, body) = send(
        app,
        multipart_request("/api/liveness", &[Part::file("image", "face.png", b"png")]),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], "video");
}

#[tokio::test]
async fn test_upload_over_limit_is_413() {
    let config = ServiceConfig {
        max_upload_bytes: 1024,
        ..ServiceConfig::new_for_test()
    };

    let (status, body) = upload_video(AppState::new(config), 4096).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_type"], "payload_too_large");
    assert_eq!(body["details"]["limit_bytes"], 1024);
}

#[tokio::test]
async fn test_video_of_exactly_the_limit_is_accepted() {
    let config = ServiceConfig {
        max_upload_bytes: 1024,
        ..ServiceConfig::new_for_test()
    };

    let (status, body) = upload_video(AppState::new(config), 1024).await;

    assert_eq!(status, StatusCode::OK);
    assert!((score_of(&body) - 1024.0 / 10_000_000.0).abs() < EPSILON);
}

#[tokio::test]
async fn test_video_one_byte_over_the_limit_is_413() {
    let config = ServiceConfig {
        max_upload_bytes: 1024,
        ..ServiceConfig::new_for_test()
    };

    let (status, body) = upload_video(AppState::new(config), 1025).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["details"]["limit_bytes"], 1024);
}
