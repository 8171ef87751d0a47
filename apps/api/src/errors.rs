#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only input- and transport-stage failures live here. Model-content failures
/// never reach this type — the validator absorbs them into the fallback record.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Document is not a valid PDF: {0}")]
    DocumentCorrupt(String),

    #[error("{0}")]
    DocumentUnreadable(String),

    #[error("Could not extract text from PDF")]
    DocumentEmpty,

    #[error("Evaluation service unreachable: {0}")]
    ServiceUnavailable(String),

    #[error("Evaluation service error: {0}")]
    Service(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
            }
            AppError::DocumentCorrupt(msg) => (
                StatusCode::BAD_REQUEST,
                "DOCUMENT_CORRUPT",
                format!("Document is not a valid PDF: {msg}"),
            ),
            AppError::DocumentUnreadable(msg) => {
                (StatusCode::BAD_REQUEST, "DOCUMENT_UNREADABLE", msg.clone())
            }
            AppError::DocumentEmpty => (
                StatusCode::BAD_REQUEST,
                "DOCUMENT_EMPTY",
                "Could not extract text from PDF".to_string(),
            ),
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Completion service unreachable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "The evaluation service could not be reached".to_string(),
                )
            }
            AppError::Service(msg) => {
                tracing::error!("Completion service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SERVICE_ERROR",
                    "The evaluation service returned an error".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
