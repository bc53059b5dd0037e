//! # PXE Errors
//!
//! Failures talking to the network-execution service, one variant per layer of
//! the request: transport, HTTP, JSON-RPC, decoding and transaction outcome.

use lib_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PxeError {
    /// Connection refused, DNS failure, timeout
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON-RPC `error` object
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Result did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Transaction was mined but did not succeed
    #[error("transaction {tx_hash} {status}: {reason}")]
    TxFailed {
        tx_hash: String,
        status: String,
        reason: String,
    },
}

impl PxeError {
    /// True when the service could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PxeError::Transport(_) | PxeError::Http { .. })
    }
}

impl From<reqwest::Error> for PxeError {
    fn from(err: reqwest::Error) -> Self {
        PxeError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PxeError {
    fn from(err: serde_json::Error) -> Self {
        PxeError::Decode(err.to_string())
    }
}

impl From<PxeError> for AppError {
    fn from(err: PxeError) -> Self {
        match err {
            PxeError::Transport(_) | PxeError::Http { .. } | PxeError::Decode(_) => {
                AppError::Pxe(err.to_string())
            }
            PxeError::Rpc { message, .. } => AppError::Contract(message),
            PxeError::TxFailed { .. } => AppError::Contract(err.to_string()),
            PxeError::InvalidAddress(msg) => AppError::InvalidInput(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_maps_to_contract_message() {
        let err = PxeError::Rpc {
            code: -32000,
            message: "Assertion failed: caller is not minter".to_string(),
        };
        match AppError::from(err) {
            AppError::Contract(msg) => assert_eq!(msg, "Assertion failed: caller is not minter"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_unreachable() {
        assert!(PxeError::Transport("connection refused".into()).is_unreachable());
        assert!(!PxeError::Decode("bad".into()).is_unreachable());
    }
}
