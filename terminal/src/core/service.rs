//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The network-execution service itself is abstracted by
//! [`lib_aztec::NetworkService`]; this module covers the deploy/mint HTTP API.

use async_trait::async_trait;
use shared::{DeployNftResponse, MintNftRequest, MintNftResponse};

/// Trait for deploy/mint API operations
///
/// Errors are user-facing messages, taken from the `{"error"}` body when the
/// server sends one.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Deploy a new collection through the server's sandbox account
    async fn deploy_nft(&self, name: &str, symbol: &str) -> Result<DeployNftResponse, String>;

    /// Mint on the server's configured collection
    async fn mint_nft(&self, request: MintNftRequest) -> Result<MintNftResponse, String>;

    /// Whether the API answers its health check
    async fn health(&self) -> Result<(), String>;
}
