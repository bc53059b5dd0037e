//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use terminal::core::error::{AppError, Result};
//!
//! fn validate_symbol(symbol: &str) -> Result<String> {
//!     if symbol.is_empty() {
//!         return Err(AppError::Validation("Symbol cannot be empty".to_string()));
//!     }
//!     Ok(symbol.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use terminal::core::service::ApiService;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn ApiService> = Arc::new(terminal::services::api::ApiClient::new(&config.api_url));
//!
//! // In tests: any other implementation
//! let api: Arc<dyn ApiService> = Arc::new(FakeApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
