//! # Network Client Provider
//!
//! Owns the connection to the network-execution service (PXE) for the whole
//! application session: connection status, chain identity and the accounts
//! the service knows about.
//!
//! ## Lifecycle
//!
//! ```text
//! Disconnected ──mount()──► Connecting ──node info ok──► Connected
//!                               │
//!                               └──failure──► Disconnected (+ error, toast)
//! ```
//!
//! There is no retry and no readiness polling. A failed mount leaves the
//! provider Disconnected with the reason in [`NetworkClientProvider::error`].
//!
//! State lives behind a `parking_lot::RwLock` and is never held across an `.await`.

use crate::app::notifications::NotificationCenter;
use lib_aztec::{AztecAddress, NetworkService, NodeInfo, PxeClient, PxeError};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub const PXE_UNAVAILABLE_TOAST: &str =
    "Failed to connect to Aztec PXE service. Make sure Sandbox is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Default)]
struct NetworkState {
    connecting: bool,
    client: Option<Arc<dyn NetworkService>>,
    chain_id: Option<u64>,
    accounts: Vec<AztecAddress>,
    error: Option<String>,
}

impl NetworkState {
    fn status(&self) -> ConnectionStatus {
        if self.client.is_some() {
            ConnectionStatus::Connected
        } else if self.connecting {
            ConnectionStatus::Connecting
        } else {
            ConnectionStatus::Disconnected
        }
    }
}

/// How the provider obtains its client on mount.
enum Connector {
    Url { url: String, timeout: Duration },
    Service(Arc<dyn NetworkService>),
}

pub struct NetworkClientProvider {
    connector: Connector,
    state: RwLock<NetworkState>,
    notifications: Arc<NotificationCenter>,
}

impl NetworkClientProvider {
    /// Provider that builds a JSON-RPC client for `url` on mount.
    pub fn new(url: impl Into<String>, timeout: Duration, notifications: Arc<NotificationCenter>) -> Self {
        Self {
            connector: Connector::Url {
                url: url.into(),
                timeout,
            },
            state: RwLock::new(NetworkState::default()),
            notifications,
        }
    }

    /// Provider over an existing service implementation.
    pub fn with_service(service: Arc<dyn NetworkService>, notifications: Arc<NotificationCenter>) -> Self {
        Self {
            connector: Connector::Service(service),
            state: RwLock::new(NetworkState::default()),
            notifications,
        }
    }

    /// Endpoint the provider connects to.
    pub fn url(&self) -> &str {
        match &self.connector {
            Connector::Url { url, .. } => url,
            Connector::Service(service) => service.url(),
        }
    }

    async fn establish(&self) -> Result<(Arc<dyn NetworkService>, NodeInfo), PxeError> {
        let client: Arc<dyn NetworkService> = match &self.connector {
            Connector::Url { url, timeout } => Arc::new(PxeClient::new(url, *timeout)?),
            Connector::Service(service) => service.clone(),
        };
        let info = client.node_info().await?;
        Ok((client, info))
    }

    /// Connect to the service, then load its registered accounts.
    ///
    /// A mount while another is in flight, or once connected, returns immediately.
    #[instrument(skip(self), fields(url = %self.url()))]
    pub async fn mount(&self) {
        {
            let mut state = self.state.write();
            if state.connecting || state.client.is_some() {
                debug!("[PXE] Mount skipped: {:?}", state.status());
                return;
            }
            state.connecting = true;
        }

        match self.establish().await {
            Ok((client, node)) => {
                {
                    let mut state = self.state.write();
                    state.client = Some(client.clone());
                    state.chain_id = Some(node.l1_chain_id);
                    state.connecting = false;
                }
                info!(chain_id = node.l1_chain_id, version = %node.node_version, "[PXE] Connected to PXE on chain {}", node.l1_chain_id);

                if self.load_accounts(client.as_ref()).await {
                    self.state.write().error = None;
                }
            }
            Err(e) => {
                error!("[PXE] Failed to connect to PXE: {}", e);
                {
                    let mut state = self.state.write();
                    state.connecting = false;
                    state.client = None;
                    state.chain_id = None;
                    state.accounts.clear();
                    state.error = Some(format!("Failed to connect to PXE: {e}"));
                }
                self.notifications.error(PXE_UNAVAILABLE_TOAST);
            }
        }
    }

    async fn load_accounts(&self, client: &dyn NetworkService) -> bool {
        match client.registered_accounts().await {
            Ok(accounts) => {
                info!(count = accounts.len(), "[PXE] Registered accounts loaded");
                self.state.write().accounts = accounts;
                true
            }
            Err(e) => {
                warn!("[PXE] Failed to load accounts: {}", e);
                self.state.write().error = Some(format!("Failed to load accounts: {e}"));
                false
            }
        }
    }

    /// Re-query the account list. Does nothing when not connected.
    pub async fn refresh_accounts(&self) {
        let Some(client) = self.client() else {
            debug!("[PXE] refresh_accounts ignored: not connected");
            return;
        };
        self.load_accounts(client.as_ref()).await;
    }

    pub fn state(&self) -> ConnectionStatus {
        self.state.read().status()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionStatus::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.state() == ConnectionStatus::Connecting
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.state.read().chain_id
    }

    pub fn accounts(&self) -> Vec<AztecAddress> {
        self.state.read().accounts.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Client handle, present only while connected.
    pub fn client(&self) -> Option<Arc<dyn NetworkService>> {
        self.state.read().client.clone()
    }
}
