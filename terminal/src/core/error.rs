//! # Common Error Types
//!
//! Consolidated error handling for the marketplace client.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the terminal application.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source, matching how they are surfaced:
//!
//! - **Connection**: the network-execution service could not be reached or queried.
//!   Shown as a persistent status plus a notification, never retried automatically.
//! - **Wallet**: connect/disconnect preconditions and account selection.
//! - **Contract**: a contract call or deployment failed or reverted.
//! - **Api**: the deploy/mint HTTP API returned an error or could not be reached.
//! - **Validation**: user input rejected before anything is sent.
//! - **Storage**: the persisted session flag could not be read or written.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use terminal::core::error::AppError;
//!
//! fn validate_price(price: u128) -> Result<u128, AppError> {
//!     if price == 0 {
//!         return Err(AppError::Validation("Price must be greater than 0".to_string()));
//!     }
//!     Ok(price)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `PxeError` → `AppError::Connection` when the service is unreachable, `AppError::Contract` otherwise
//! - `WalletError` → `AppError::Wallet`
//! - `StorageError` → `AppError::Storage`

use lib_aztec::PxeError;
use thiserror::Error;

/// Application-wide error type covering all error scenarios in the terminal.
///
/// # Example
///
/// ```rust
/// use terminal::core::error::AppError;
///
/// let err = AppError::Contract("Contract not initialized".to_string());
/// assert_eq!(err.to_string(), "Contract error: Contract not initialized");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Network-execution service unreachable or answering garbage.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Wallet session error.
    ///
    /// - Service not connected when connecting
    /// - No test account available
    /// - Wallet not connected when an operation needs an account
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Contract call, simulation or deployment failure.
    ///
    /// Carries the message reported by the service, e.g. a failed assertion.
    #[error("Contract error: {0}")]
    Contract(String),

    /// Deploy/mint HTTP API error.
    #[error("API error: {0}")]
    Api(String),

    /// Input validation error.
    ///
    /// - Malformed addresses or token ids
    /// - Missing required fields (name, symbol, description)
    /// - Zero price
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session flag persistence error.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<PxeError> for AppError {
    fn from(err: PxeError) -> Self {
        match err {
            e if e.is_unreachable() => AppError::Connection(e.to_string()),
            PxeError::Rpc { message, .. } => AppError::Contract(message),
            PxeError::InvalidAddress(msg) => AppError::Validation(msg),
            e @ PxeError::Decode(_) => AppError::Connection(e.to_string()),
            e => AppError::Contract(e.to_string()),
        }
    }
}

impl From<crate::services::wallet::WalletError> for AppError {
    fn from(err: crate::services::wallet::WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<crate::services::storage::StorageError> for AppError {
    fn from(err: crate::services::storage::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}
