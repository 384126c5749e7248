use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// How much of a non-conforming model response is echoed back to the caller.
/// The full response always goes to the log.
const RAW_EXCERPT_LEN: usize = 200;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String, raw: String },

    #[error("Model transport error: {0}")]
    ModelTransport(#[from] LlmError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::UnsupportedFormat(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Decode(msg) => (StatusCode::BAD_REQUEST, format!("Decode error: {msg}")),
            AppError::SchemaValidation { message, raw } => {
                tracing::error!("Schema validation failed: {message}; raw model output: {raw}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("{message}; raw model output: {}", excerpt(raw)),
                )
            }
            AppError::ModelTransport(e) => {
                tracing::error!("Model transport error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The language model could not be reached".to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Truncates raw model output to a diagnosable excerpt, on a char boundary.
fn excerpt(raw: &str) -> &str {
    match raw.char_indices().nth(RAW_EXCERPT_LEN) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}
