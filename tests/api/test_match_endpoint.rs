// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /api/match

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use yotouch_ai_service::{
    api::{create_app, AppState},
    config::ServiceConfig,
};

use super::common::{json_request, send};

async fn post_match(json: &str) -> (StatusCode, serde_json::Value) {
    send(
        create_app(AppState::new_for_test()),
        json_request("/api/match", json),
    )
    .await
}

#[tokio::test]
async fn test_identical_descriptors_match() {
    let (status, body) =
        post_match(r#"{"reference": [0.1, 0.2, 0.3], "probe": [0.1, 0.2, 0.3]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance"], 0.0);
    assert_eq!(body["isMatch"], true);
    assert_eq!(body["threshold"], 0.6);
}

#[tokio::test]
async fn test_distant_descriptors_do_not_match() {
    let (status, body) = post_match(r#"{"reference": [0.0, 0.0], "probe": [3.0, 4.0]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance"], 5.0);
    assert_eq!(body["isMatch"], false);
}

#[tokio::test]
async fn test_custom_threshold() {
    let (status, body) =
        post_match(r#"{"reference": [0.0, 0.0], "probe": [3.0, 4.0], "threshold": 6.0}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isMatch"], true);
    assert_eq!(body["threshold"], 6.0);
}

#[tokio::test]
async fn test_length_mismatch_is_validation_error() {
    let (status, body) = post_match(r#"{"reference": [0.1, 0.2], "probe": [0.1]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["details"]["field"], "probe");
}

#[tokio::test]
async fn test_empty_reference_is_validation_error() {
    let (status, body) = post_match(r#"{"reference": [], "probe": [0.1]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "reference");
}

#[tokio::test]
async fn test_negative_threshold_is_validation_error() {
    let (status, body) =
        post_match(r#"{"reference": [0.1], "probe": [0.1], "threshold": -1.0}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "threshold");
}

#[tokio::test]
async fn test_malformed_json_is_invalid_request() {
    let (status, body) = post_match(r#"{"reference": [0.1"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");
}

#[tokio::test]
async fn test_missing_probe_is_invalid_request() {
    let (status, body) = post_match(r#"{"reference": [0.1]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");
}

#[tokio::test]
async fn test_body_over_limit_is_413() {
    let config = ServiceConfig {
        max_upload_bytes: 64,
        ..ServiceConfig::new_for_test()
    };
    let descriptor = vec!["0.123456"; 24].join(", ");
    let json = format!(r#"{{"reference": [{0}], "probe": [{0}]}}"#, descriptor);
    assert!(json.len() > 64);

    let (status, body) = send(
        create_app(AppState::new(config)),
        json_request("/api/match", &json),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_type"], "payload_too_large");
    assert_eq!(body["details"]["limit_bytes"], 64);
}

#[tokio::test]
async fn test_missing_content_type_is_415() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/match")
        .body(Body::from(r#"{"reference": [0.1], "probe": [0.1]}"#))
        .unwrap();

    let (status, body) = send(create_app(AppState::new_for_test()), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error_type"], "unsupported_media_type");
}
