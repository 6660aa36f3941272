//! Translation of handler failures into HTTP responses.
//!
//! Every error body the API emits is built here.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::validation::ValidationError;
use crate::db::DbError;

/// Message returned for every storage failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    #[schema(example = "validation_error")]
    pub error: String,
    /// Human-readable description
    #[schema(example = "q: must not be blank")]
    pub message: String,
}

/// Failures a handler can return.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,

    #[error("Failed to read request body: {reason}")]
    UnreadableBody { status: StatusCode, reason: String },

    #[error(transparent)]
    Storage(#[from] DbError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::UnreadableBody { status, .. } => *status,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::UnsupportedMediaType => "unsupported_media_type",
            AppError::UnreadableBody { .. } => "unreadable_body",
            AppError::Storage(_) => "internal_error",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType,
            JsonRejection::BytesRejection(e) => AppError::UnreadableBody {
                status: e.status(),
                reason: e.body_text(),
            },
            other => AppError::Validation(ValidationError::Malformed {
                reason: other.body_text(),
            }),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(ValidationError::Malformed {
            reason: rejection.body_text(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Storage(e) => error!(error = %e, "Storage operation failed"),
            _ => warn!(error = %self, "Request rejected"),
        }

        // Storage details stay in the log.
        let message = match &self {
            AppError::Storage(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
