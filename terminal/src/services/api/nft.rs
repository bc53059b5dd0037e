//! # NFT Endpoints
//!
//! Collection deployment and minting through the API server's sandbox account.

use super::client::ApiClient;
use reqwest::Response;
use serde::de::DeserializeOwned;
use shared::{DeployNftRequest, DeployNftResponse, ErrorResponse, MintNftRequest, MintNftResponse};

/// Deploy a new collection.
#[tracing::instrument(skip(client))]
pub async fn deploy_nft(client: &ApiClient, name: &str, symbol: &str) -> Result<DeployNftResponse, String> {
    let start = std::time::Instant::now();
    let request = DeployNftRequest {
        name: name.to_string(),
        symbol: symbol.to_string(),
    };

    let response = client
        .client
        .post(client.endpoint("/api/deploy-nft"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Deploy request network error");
            format!("Network error: {}", e)
        })?;

    let result = parse_response::<DeployNftResponse>(response, "Failed to deploy NFT").await;
    if let Ok(ref deployed) = result {
        tracing::info!(
            address = %deployed.address,
            duration_ms = start.elapsed().as_millis(),
            "Collection deployed"
        );
    }
    result
}

/// Mint on the server's configured collection.
#[tracing::instrument(skip(client, request), fields(recipient = %request.recipient_address, is_private = request.is_private))]
pub async fn mint_nft(client: &ApiClient, request: MintNftRequest) -> Result<MintNftResponse, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.endpoint("/api/mint-nft"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Mint request network error");
            format!("Network error: {}", e)
        })?;

    let result = parse_response::<MintNftResponse>(response, "Failed to mint NFT").await;
    if let Ok(ref minted) = result {
        tracing::info!(
            token_id = %minted.token_id,
            duration_ms = start.elapsed().as_millis(),
            "NFT minted"
        );
    }
    result
}

/// Check that the server answers `/health`.
pub async fn health(client: &ApiClient) -> Result<(), String> {
    let response = client
        .client
        .get(client.endpoint("/health"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("Health check failed: {}", response.status()))
    }
}

/// Decode a success body, or turn an error status into the server's `{"error"}`
/// message (falling back to `fallback` and the status).
async fn parse_response<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, String> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            format!("Failed to parse response: {}", e)
        });
    }

    tracing::warn!(status = status.as_u16(), "API request failed");
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => Err(body.error),
        _ => Err(format!("{}: {}", fallback, status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::ApiService;
    use lib_aztec::mock::MockNetworkService;
    use lib_aztec::{AztecAddress, NetworkService};
    use lib_core::Config;
    use lib_web::{create_router, AppState};
    use std::sync::Arc;

    async fn spawn_api(mock: Arc<MockNetworkService>, contract: Option<String>) -> ApiClient {
        let pxe: Arc<dyn NetworkService> = mock;
        let config = Config {
            nft_contract_address: contract,
            ..Default::default()
        };
        let app = create_router(AppState { config, pxe }, vec!["http://localhost:3000".to_string()]);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        ApiClient::new(format!("http://{}", addr))
    }

    #[tokio::test]
    async fn test_deploy_and_mint_over_http() {
        let mock = Arc::new(MockNetworkService::new());
        let contract = AztecAddress::from_low_u64(0xc0ffee).to_string();
        let api = spawn_api(mock.clone(), Some(contract)).await;

        api.health().await.unwrap();

        let deployed = api.deploy_nft("Night Owls", "OWL").await.unwrap();
        assert_eq!(deployed.name, "Night Owls");
        assert_eq!(deployed.symbol, "OWL");
        assert_eq!(mock.deployments().len(), 1);

        let minted = api
            .mint_nft(MintNftRequest {
                name: "Owl #1".to_string(),
                description: "First owl".to_string(),
                image: None,
                recipient_address: AztecAddress::from_low_u64(0xb0b).to_string(),
                is_private: true,
            })
            .await
            .unwrap();
        assert!(minted.success);
        assert!(minted.is_private);
        assert!(minted.token_id.parse::<u128>().is_ok());
    }

    #[tokio::test]
    async fn test_error_body_becomes_message() {
        let mock = Arc::new(MockNetworkService::new());
        let api = spawn_api(mock, None).await;

        let err = api.deploy_nft("", "OWL").await.unwrap_err();
        assert_eq!(err, "Name and symbol are required");

        let err = api
            .mint_nft(MintNftRequest {
                name: "Owl #1".to_string(),
                description: "First owl".to_string(),
                image: None,
                recipient_address: AztecAddress::from_low_u64(0xb0b).to_string(),
                is_private: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err, "NFT contract address not configured");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let api = ApiClient::new("http://127.0.0.1:9");

        let err = api.health().await.unwrap_err();
        assert!(err.starts_with("Network error: "));
    }
}
