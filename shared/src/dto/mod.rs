//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and the API server via the REST API.
//!
//! ## Module Organization
//!
//! - [`nft`] - Collection deployment and minting
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/mint-nft
//! Content-Type: application/json
//!
//! {
//!   "name": "Owl #1",
//!   "description": "First owl",
//!   "image": "ipfs://owl-1.png",
//!   "recipientAddress": "0x2a3b...",
//!   "isPrivate": true
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "tokenId": "1718000000000",
//!   "recipient": "0x2a3b...",
//!   "isPrivate": true
//! }
//! ```

pub mod nft;

pub use nft::*;
