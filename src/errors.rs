//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Client errors keep the
//! body shapes existing clients rely on: most are plain text, while
//! credential and registration failures are JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Generic body for unexpected server-side failures
const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Invalid email or password")]
    InvalidCredentials,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Registration endpoints report server failures with their own body
    #[error("Registration failed")]
    RegistrationFailed(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// JSON `{ "message": ... }` body
#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// JSON `{ "error": ... }` body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RegistrationFailed(_)
            | AppError::Database(_)
            | AppError::Jwt(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log server-side detail for errors whose cause is hidden from the client
    fn log_internal(&self) {
        match self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Jwt(e) => tracing::error!("JWT error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::RegistrationFailed(msg) => tracing::error!("Registration failed: {}", msg),
            _ => {}
        }
    }

    /// Convert server-side failures of a registration request into
    /// `RegistrationFailed`, leaving client errors untouched.
    pub fn into_registration_failure(self) -> Self {
        match self {
            AppError::Database(e) => AppError::RegistrationFailed(e.to_string()),
            AppError::Jwt(e) => AppError::RegistrationFailed(e.to_string()),
            AppError::Internal(msg) => AppError::RegistrationFailed(msg),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log_internal();

        match self {
            AppError::InvalidCredentials => (
                status,
                Json(MessageBody {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            AppError::RegistrationFailed(_) => (
                status,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            AppError::Database(_) | AppError::Jwt(_) | AppError::Internal(_) => {
                (status, SERVER_ERROR_MESSAGE).into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, Option<String>, String) {
        let response = error.into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_auth_errors_are_plain_text() {
        let (status, content_type, body) = body_of(AppError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(content_type.unwrap().starts_with("text/plain"));
        assert_eq!(body, "Unauthorized");

        let (status, _, body) = body_of(AppError::Forbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "Forbidden");
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_json_message() {
        let (status, content_type, body) = body_of(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"message":"Invalid email or password"}"#);
    }

    #[tokio::test]
    async fn test_not_found_and_validation_carry_message() {
        let (status, _, body) = body_of(AppError::not_found("Product not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Product not found");

        let (status, _, body) = body_of(AppError::validation("Username is required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Username is required");
    }

    #[tokio::test]
    async fn test_internal_detail_is_hidden() {
        let (status, _, body) = body_of(AppError::internal("connection reset by peer")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Server error");

        let db = AppError::Database(sea_orm::DbErr::Custom("secret table".into()));
        let (_, _, body) = body_of(db).await;
        assert_eq!(body, "Server error");
    }

    #[tokio::test]
    async fn test_registration_failure_body() {
        let error = AppError::internal("hash failed").into_registration_failure();
        let (status, _, body) = body_of(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Registration failed"}"#);
    }

    #[test]
    fn test_registration_failure_keeps_client_errors() {
        let error = AppError::validation("Username already exists").into_registration_failure();
        assert!(matches!(error, AppError::Validation(_)));
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        let error = missing.ok_or_not_found("Item not found").unwrap_err();
        assert!(matches!(error, AppError::NotFound(ref m) if m == "Item not found"));
    }
}
