use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::EditorError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The wire shape is a flat `{"error": string}` object, which is what both
/// editor variants read from failed responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid or corrupted PDF file")]
    Pdf(String),

    #[error("Resume structuring failed: {0}")]
    Structuring(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<EditorError> for AppError {
    fn from(e: EditorError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Pdf(detail) => {
                tracing::error!("PDF extraction failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid or corrupted PDF file".to_string(),
                )
            }
            AppError::Structuring(msg) => {
                tracing::error!("Structuring error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Resume structuring failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
