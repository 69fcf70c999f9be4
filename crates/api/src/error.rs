use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use toonvault_core::error::CoreError;
use toonvault_db::models::webtoon::FieldError;

use crate::auth::jwt::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `toonvault_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected bearer credential.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// One or more field-level failures on a create payload.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidId { entity, value } => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_ID",
                    format!("Invalid {entity} id format: {value}"),
                ),
            },

            // --- Auth errors ---
            // A missing credential answers 401; a rejected one answers 403.
            // Malformed and expired tokens are not distinguished to the caller.
            AppError::Auth(AuthError::MissingToken) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Token missing, access denied".to_string(),
            ),
            AppError::Auth(AuthError::MalformedToken | AuthError::Expired) => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Invalid or expired token".to_string(),
            ),

            // --- Validation errors carry the full accumulated field list ---
            AppError::Validation(errors) => {
                let body = json!({
                    "message": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "errors": errors,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500, carrying the driver's failure text.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                other.to_string(),
            )
        }
    }
}
