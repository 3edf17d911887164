//! Unified error handling for HTTP.
//!
//! Provides a single error type that converts to an Axum HTTP response with a
//! stable JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // Rendering
    #[cfg(feature = "templates")]
    #[error("Template error")]
    Template(#[from] tera::Error),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            #[cfg(feature = "templates")]
            AppError::Template(_) => "TEMPLATE_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "The server is misconfigured".to_string()
            }
            #[cfg(feature = "templates")]
            AppError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                "A rendering error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let message = err.user_message();
        match err {
            DomainError::InputTooLong { .. } => AppError::Validation(message),
            DomainError::InvalidBinding(msg) => AppError::Config(msg),
            DomainError::MissingElement(id) => {
                AppError::Config(format!("element #{} is missing", id))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Config(errors.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Config("bad".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_config_details_hidden() {
        let err = AppError::Config("STATIC_DIR unreadable".to_string());
        assert_eq!(err.user_message(), "The server is misconfigured");
    }

    #[test]
    fn test_input_too_long_converts_to_validation() {
        let err: AppError = DomainError::input_too_long(65, 64).into();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.user_message(), "400: Inputted password is too long.");
    }

    #[test]
    fn test_missing_element_converts_to_config() {
        let err: AppError = DomainError::missing_element("strengthAnalyser").into();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Resource not found");
    }
}
