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
/// Every variant maps to HTTP 500 with an `{"error": message}` body — the API
/// contract uses no other error status codes. AI proxy failures never reach
/// this type; they are recovered inside the `ai` module with fallback payloads.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No user profile exists for account '{0}'")]
    ProfileMissing(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                "A database error occurred".to_string()
            }
            AppError::ProfileMissing(account) => {
                format!("No user profile exists for account '{account}'")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({ "error": message }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
