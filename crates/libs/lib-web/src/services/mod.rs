//! # Web Services
//!
//! Business logic called by the HTTP handlers.
//!
//! - **[`nft`]**: Collection deployment and minting through the PXE

pub mod nft;

pub use nft::NftService;
