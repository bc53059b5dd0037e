//! # Core Library
//!
//! Configuration and the server-side error type for the marketplace API.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
