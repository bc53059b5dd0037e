//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation for NFT operations (token ids, prices, addresses)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (address formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
