//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Server faults are logged here and answered with a generic message.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded (422)
    Validation(ValidationError),

    /// Secret key mismatch (403)
    Forbidden,

    /// Verb not served on this path (405)
    MethodNotAllowed,

    /// Store failure (500, logged)
    Database(DbError),

    /// Static document unreadable (500, logged)
    Asset { path: PathBuf, source: std::io::Error },

    /// Anything unexpected, including recovered panics (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) | Self::Asset { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::Forbidden => json!({
                "error": "forbidden",
                "message": "invalid secret key"
            }),
            Self::MethodNotAllowed => json!({
                "error": "method_not_allowed",
                "message": "method not allowed"
            }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "Database error");
                internal_body()
            }
            Self::Asset { path, source } => {
                tracing::error!(path = %path.display(), error = %source, "Failed to read static document");
                internal_body()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                internal_body()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_body() -> serde_json::Value {
    json!({
        "error": "internal_error",
        "message": "internal server error"
    })
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
