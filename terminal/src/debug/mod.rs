//! # Logging Infrastructure
//!
//! File-based structured logging for the marketplace client.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/terminal.log` with daily rotation
//! - **Panic logging**: panics are recorded with their location before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use terminal::debug::{self, DebugConfig};
//!
//! let _guard = debug::init_logger(&DebugConfig::from_env());
//!
//! tracing::info!(chain_id = 31337, "Connected to PXE");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `terminal=debug,info`)
//! - `NFT_LOG_DIR`: Log directory (default: `logs`)
//! - `NFT_LOG_STDERR`: Mirror warnings and errors to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
