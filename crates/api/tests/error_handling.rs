//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use marquee_api::error::AppError;
use marquee_core::error::CoreError;
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: each variant produces its envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_body_returns_400_with_decoder_text() {
    let err = AppError::InvalidBody("expected value at line 1 column 1".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Invalid request body");
    assert_eq!(json["error"], "expected value at line 1 column 1");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn validation_returns_400_with_violation_list() {
    let err = AppError::Validation(vec![
        "title: This field is required".into(),
        "rating: This field is required".into(),
    ]);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["error"],
        json!(["title: This field is required", "rating: This field is required"])
    );
}

#[tokio::test]
async fn invalid_genre_returns_400() {
    let err = AppError::InvalidGenre("genre list is empty".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid genre format");
    assert_eq!(json["error"], "genre list is empty");
}

#[tokio::test]
async fn not_found_returns_404() {
    let err = AppError::from_core(
        "Failed to fetch movie",
        CoreError::NotFound {
            entity: "Movie",
            id: 42,
        },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Movie not found");
    assert_eq!(json["error"], "Entity not found: Movie with id 42");
}

#[tokio::test]
async fn store_failure_returns_500_with_context_message() {
    let err = AppError::from_core(
        "Failed to create movie",
        CoreError::Store("relation \"movies\" does not exist".into()),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], 500);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Failed to create movie");
    assert_eq!(json["error"], "relation \"movies\" does not exist");
}

// ---------------------------------------------------------------------------
// Test: CoreError classification
// ---------------------------------------------------------------------------

#[test]
fn core_errors_map_to_client_or_server_variants() {
    assert_matches!(
        AppError::from_core("ctx", CoreError::Validation(vec!["x".into()])),
        AppError::Validation(v) if v == vec!["x".to_string()]
    );
    assert_matches!(
        AppError::from_core("ctx", CoreError::Encode("bad".into())),
        AppError::InvalidGenre(_)
    );
    assert_matches!(
        AppError::from_core("ctx", CoreError::Store("down".into())),
        AppError::Internal { context: "ctx", .. }
    );
}
