//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::service::ApiService;
use reqwest::Client;
use shared::{DeployNftResponse, MintNftRequest, MintNftResponse};
use std::time::Duration;

/// Default base URL of the deploy/mint API server
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for communicating with the backend API server.
///
/// Holds one connection pool for every request.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a 10 second request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn deploy_nft(&self, name: &str, symbol: &str) -> Result<DeployNftResponse, String> {
        crate::services::api::nft::deploy_nft(self, name, symbol).await
    }

    async fn mint_nft(&self, request: MintNftRequest) -> Result<MintNftResponse, String> {
        crate::services::api::nft::mint_nft(self, request).await
    }

    async fn health(&self) -> Result<(), String> {
        crate::services::api::nft::health(self).await
    }
}
