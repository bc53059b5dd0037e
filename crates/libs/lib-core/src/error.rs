//! # Centralized Error Handling
//!
//! This module defines the server-side error type [`AppError`] used consistently
//! across the API crates. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx) - User/input issues
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request, including
//!      request bodies the JSON extractor rejects
//!
//! 2. **Server Errors** (5xx) - Internal/system issues
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Pxe`](AppError::Pxe) → 500 (network-execution service failure)
//!    - [`Contract`](AppError::Contract) → 500 (deployment, send or simulate failure)
//!
//! Every error is rendered as `{"error": "<message>"}`. Service and contract
//! failures carry the underlying message to the caller: the marketplace pages
//! show it verbatim in a notification.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_symbol(symbol: &str) -> Result<&str> {
//!     if symbol.is_empty() {
//!         return Err(AppError::InvalidInput("Name and symbol are required".to_string()));
//!     }
//!     Ok(symbol)
//! }
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Server error type covering all API error scenarios.
///
/// Each variant includes a descriptive `String` for context.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or a missing setting at request time.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-execution service unreachable or returned an error.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("PXE error: {0}")]
    Pxe(String),

    /// Contract deployment or method invocation failed.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Contract error: {0}")]
    Contract(String),

    /// Invalid user input validation error.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Pxe(_) | AppError::Contract(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the caller.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::InvalidInput(msg) | AppError::Config(msg) | AppError::Pxe(msg) | AppError::Contract(msg) => msg,
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_client_error() {
            tracing::warn!("Client error: {}", self);
        } else {
            tracing::error!("Server error: {}", self);
        }

        let body = Json(json!({ "error": self.user_message() }));

        (status, body).into_response()
    }
}

/// Request bodies that are not valid JSON, or do not fit the DTO, are bad input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Config("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Pxe("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Contract("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_contract_message_is_passed_through() {
        let err = AppError::Contract("Assertion failed: not the owner".into());
        assert_eq!(err.user_message(), "Assertion failed: not the owner");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::InvalidInput("Name and symbol are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "Name and symbol are required" }));
    }
}
