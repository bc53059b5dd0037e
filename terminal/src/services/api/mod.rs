//! # Backend API Client Module
//!
//! HTTP client for the deploy/mint API server (`lib-web`).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and the ApiService implementation
//! └── nft.rs      - Collection deployment, minting and health endpoints
//! ```

pub mod client;
pub mod nft;

pub use client::{ApiClient, DEFAULT_API_URL};
