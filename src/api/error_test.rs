//! Tests for error translation.

use axum::{
    Json,
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use serde_json::Value;

use super::error::{AppError, INTERNAL_ERROR_MESSAGE};
use super::validation::ValidationError;
use crate::db::DbError;

async fn render(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn validation_error_renders_400_with_uniform_shape() {
    let (status, body) = render(ValidationError::Blank { field: "q" }.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "q: must not be blank");
}

#[tokio::test]
async fn malformed_input_is_a_validation_error() {
    let err: AppError = ValidationError::Malformed {
        reason: "bad json".to_string(),
    }
    .into();
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("bad json"));
}

#[tokio::test]
async fn unsupported_media_type_renders_415() {
    let (status, body) = render(AppError::UnsupportedMediaType).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "unsupported_media_type");
}

#[tokio::test]
async fn storage_error_renders_500() {
    let err: AppError = DbError::Connection {
        message: "database is locked".to_string(),
    }
    .into();
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn storage_error_detail_is_not_sent_to_client() {
    let err: AppError = DbError::Database {
        message: "no such table: notes".to_string(),
    }
    .into();
    let (_, body) = render(err).await;

    assert!(!body["message"].as_str().unwrap().contains("notes"));
}

#[tokio::test]
async fn oversized_body_rejection_is_not_a_validation_error() {
    let request = Request::builder()
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(vec![b' '; 3 * 1024 * 1024]))
        .unwrap();

    // Without a DefaultBodyLimit layer the extractor applies axum's 2 MB default.
    let rejection = Json::<Value>::from_request(request, &()).await.unwrap_err();
    let (status, body) = render(rejection.into()).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "unreadable_body");
}
