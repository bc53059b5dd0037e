//! # Application Orchestrator
//!
//! The [`App`] struct wires the providers together and owns the startup order.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  App                                                     │
//! │  ├── NotificationCenter   (toasts, drained by the CLI)   │
//! │  ├── NetworkClientProvider                               │
//! │  ├── WalletSessionProvider ──depends on──► network       │
//! │  ├── NftService            ──depends on──► wallet        │
//! │  └── ApiService            (deploy / mint HTTP API)      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Order
//!
//! [`App::bootstrap`] awaits the network mount to completion before the wallet
//! mount runs, so the wallet only attempts its auto-reconnect once the
//! connection outcome is known.

pub mod notifications;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::services::nft::NftService;
use crate::services::pxe::NetworkClientProvider;
use crate::services::storage::{FileSessionStore, SessionStore};
use crate::services::wallet::WalletSessionProvider;
use crate::utils::validation::validate_collection;
use notifications::NotificationCenter;
use shared::{DeployNftResponse, MintNftRequest, MintNftResponse};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const PXE_NOT_CONNECTED_TOAST: &str = "PXE is not connected. Make sure your Aztec Sandbox is running.";

/// Main application orchestrator
pub struct App {
    pub config: ClientConfig,
    pub notifications: Arc<NotificationCenter>,
    pub pxe: Arc<NetworkClientProvider>,
    pub wallet: Arc<WalletSessionProvider>,
    pub nft: Arc<NftService>,
    pub api: Arc<dyn ApiService>,
}

impl App {
    /// App backed by the configured PXE endpoint, API server and session file.
    pub fn new(config: ClientConfig) -> Self {
        let notifications = Arc::new(NotificationCenter::new());
        let pxe = Arc::new(NetworkClientProvider::new(
            config.pxe_url.clone(),
            config.pxe_timeout,
            notifications.clone(),
        ));
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(config.session_file.clone()));
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config.api_url.clone()));

        Self::with_parts(config, notifications, pxe, store, api)
    }

    /// App over caller-supplied providers.
    pub fn with_parts(
        config: ClientConfig,
        notifications: Arc<NotificationCenter>,
        pxe: Arc<NetworkClientProvider>,
        store: Arc<dyn SessionStore>,
        api: Arc<dyn ApiService>,
    ) -> Self {
        let wallet = Arc::new(WalletSessionProvider::new(pxe.clone(), store, notifications.clone()));
        let nft = Arc::new(NftService::new(
            wallet.clone(),
            notifications.clone(),
            config.contract_address,
        ));

        Self {
            config,
            notifications,
            pxe,
            wallet,
            nft,
            api,
        }
    }

    /// Mount the network provider, then the wallet provider.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) {
        self.pxe.mount().await;
        self.wallet.mount().await;
        info!(
            pxe = ?self.pxe.state(),
            wallet = ?self.wallet.status(),
            "[APP] Bootstrap complete"
        );
    }

    /// Deploy a collection through the API server and make it the active contract.
    #[instrument(skip(self))]
    pub async fn deploy_collection(&self, name: &str, symbol: &str) -> Result<DeployNftResponse> {
        if let Err(msg) = validate_collection(name, symbol).into_result() {
            self.notifications.error(msg.clone());
            return Err(AppError::Validation(msg));
        }

        if !self.pxe.is_connected() {
            self.notifications.error(PXE_NOT_CONNECTED_TOAST);
            return Err(AppError::Connection(PXE_NOT_CONNECTED_TOAST.to_string()));
        }

        match self.api.deploy_nft(name.trim(), symbol.trim()).await {
            Ok(deployed) => {
                match deployed.address.parse() {
                    Ok(address) => self.nft.set_contract_address(address),
                    Err(e) => {
                        warn!(address = %deployed.address, "[APP] Deployed address not usable: {}", e);
                        self.notifications.warning(format!(
                            "Deployed address {} is invalid; the active contract is unchanged",
                            deployed.address
                        ));
                    }
                }
                self.notifications.success(format!(
                    "NFT Contract successfully deployed! Name: {} Symbol: {} Address: {}",
                    deployed.name, deployed.symbol, deployed.address
                ));
                Ok(deployed)
            }
            Err(msg) => {
                self.notifications.error(format!("Deployment failed: {}", msg));
                Err(AppError::Api(msg))
            }
        }
    }

    /// Mint through the API server's configured collection. Requires a connected wallet.
    #[instrument(skip(self, request), fields(is_private = request.is_private))]
    pub async fn mint_via_api(&self, request: MintNftRequest) -> Result<MintNftResponse> {
        if !self.wallet.is_connected() {
            self.notifications.error("Please connect your wallet first");
            return Err(AppError::Wallet("Wallet not connected".to_string()));
        }

        match self.api.mint_nft(request).await {
            Ok(minted) => {
                self.notifications
                    .success(format!("NFT successfully minted! Token ID: {}", minted.token_id));
                Ok(minted)
            }
            Err(msg) => {
                self.notifications.error(msg.clone());
                Err(AppError::Api(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemorySessionStore;
    use async_trait::async_trait;
    use lib_aztec::mock::MockNetworkService;
    use lib_aztec::AztecAddress;
    use notifications::NotificationLevel;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct FakeApi {
        deploys: Mutex<Vec<(String, String)>>,
        fail: bool,
        deployed_address: Option<String>,
    }

    #[async_trait]
    impl ApiService for FakeApi {
        async fn deploy_nft(&self, name: &str, symbol: &str) -> std::result::Result<DeployNftResponse, String> {
            if self.fail {
                return Err("connection refused".to_string());
            }
            self.deploys.lock().push((name.to_string(), symbol.to_string()));
            Ok(DeployNftResponse {
                address: self
                    .deployed_address
                    .clone()
                    .unwrap_or_else(|| AztecAddress::from_low_u64(0xc0ffee).to_string()),
                name: name.to_string(),
                symbol: symbol.to_string(),
            })
        }

        async fn mint_nft(&self, request: MintNftRequest) -> std::result::Result<MintNftResponse, String> {
            Ok(MintNftResponse {
                success: true,
                token_id: "42".to_string(),
                recipient: request.recipient_address,
                is_private: request.is_private,
            })
        }

        async fn health(&self) -> std::result::Result<(), String> {
            Ok(())
        }
    }

    fn app(mock: MockNetworkService, store: MemorySessionStore, api: FakeApi) -> App {
        let notifications = Arc::new(NotificationCenter::new());
        let pxe = Arc::new(NetworkClientProvider::with_service(Arc::new(mock), notifications.clone()));
        App::with_parts(ClientConfig::default(), notifications, pxe, Arc::new(store), Arc::new(api))
    }

    #[tokio::test]
    async fn test_bootstrap_restores_session() {
        let app = app(MockNetworkService::new(), MemorySessionStore::connected(), FakeApi::default());

        app.bootstrap().await;

        assert!(app.pxe.is_connected());
        assert!(app.wallet.is_connected());
    }

    #[tokio::test]
    async fn test_bootstrap_with_unreachable_network() {
        let app = app(MockNetworkService::unreachable(), MemorySessionStore::connected(), FakeApi::default());

        app.bootstrap().await;

        assert!(!app.pxe.is_connected());
        assert!(!app.wallet.is_connected());
        assert_eq!(app.notifications.count(NotificationLevel::Success), 0);
        assert!(app.notifications.count(NotificationLevel::Error) >= 2);
    }

    #[tokio::test]
    async fn test_deploy_sets_active_contract() {
        let app = app(MockNetworkService::new(), MemorySessionStore::new(), FakeApi::default());
        app.bootstrap().await;

        let deployed = app.deploy_collection("Night Owls", "OWL").await.unwrap();

        assert_eq!(deployed.symbol, "OWL");
        assert_eq!(app.nft.contract_address(), Some(AztecAddress::from_low_u64(0xc0ffee)));
    }

    #[tokio::test]
    async fn test_deploy_preconditions() {
        let app = app(MockNetworkService::unreachable(), MemorySessionStore::new(), FakeApi::default());

        assert!(matches!(
            app.deploy_collection("", "OWL").await,
            Err(AppError::Validation(_))
        ));
        assert!(app.notifications.contains(NotificationLevel::Error, "Name and symbol are required"));

        app.bootstrap().await;
        assert!(matches!(
            app.deploy_collection("Night Owls", "OWL").await,
            Err(AppError::Connection(_))
        ));
        assert!(app.notifications.contains(NotificationLevel::Error, PXE_NOT_CONNECTED_TOAST));
    }

    #[tokio::test]
    async fn test_deploy_failure_reports_message() {
        let api = FakeApi {
            fail: true,
            ..Default::default()
        };
        let app = app(MockNetworkService::new(), MemorySessionStore::new(), api);
        app.bootstrap().await;

        assert!(app.deploy_collection("Night Owls", "OWL").await.is_err());
        assert!(app
            .notifications
            .contains(NotificationLevel::Error, "Deployment failed: connection refused"));
    }

    #[tokio::test]
    async fn test_deploy_with_unusable_address_warns() {
        let api = FakeApi {
            deployed_address: Some("0x1234".to_string()),
            ..Default::default()
        };
        let app = app(MockNetworkService::new(), MemorySessionStore::new(), api);
        app.bootstrap().await;

        assert!(app.deploy_collection("Night Owls", "OWL").await.is_ok());

        assert_eq!(app.nft.contract_address(), None);
        assert_eq!(app.notifications.count(NotificationLevel::Warning), 1);
    }

    #[tokio::test]
    async fn test_mint_via_api_requires_wallet() {
        let app = app(MockNetworkService::new(), MemorySessionStore::new(), FakeApi::default());
        app.bootstrap().await;
        let request = MintNftRequest {
            name: "Owl #1".to_string(),
            description: "First owl".to_string(),
            image: None,
            recipient_address: AztecAddress::from_low_u64(0xb0b).to_string(),
            is_private: true,
        };

        assert!(app.mint_via_api(request.clone()).await.is_err());
        assert!(app.notifications.contains(NotificationLevel::Error, "Please connect your wallet first"));

        app.wallet.connect().await.unwrap();
        let minted = app.mint_via_api(request).await.unwrap();
        assert_eq!(minted.token_id, "42");
        assert!(app
            .notifications
            .contains(NotificationLevel::Success, "NFT successfully minted! Token ID: 42"));
    }
}
