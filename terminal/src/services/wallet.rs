//! # Wallet Session Provider
//!
//! Selects the account the marketplace acts as and remembers, across restarts,
//! whether the user wanted to stay connected.
//!
//! ## Features
//! - Connect by selecting the first pre-provisioned sandbox account
//! - Disconnect, clearing the persisted flag
//! - Automatic reconnection on mount when the flag is set
//!
//! ## State Machine
//!
//! ```text
//! Disconnected ──connect() [network Connected]──► Connecting ──► Connected
//!      ▲                                              │              │
//!      └──────────────── failure ─────────────────────┘              │
//!      └──────────────────────── disconnect() ───────────────────────┘
//! ```
//!
//! The wallet can only become Connected while the network client is Connected.
//! The balance is a display placeholder (`"0"`); no key material is handled here.

use crate::app::notifications::NotificationCenter;
use crate::services::pxe::NetworkClientProvider;
use crate::services::storage::SessionStore;
use lib_aztec::AztecAddress;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Balance shown for a freshly connected account.
pub const PLACEHOLDER_BALANCE: &str = "0";

/// Wallet connection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("PXE service not connected")]
    ServiceNotConnected,

    #[error("Wallet connection already in progress")]
    AlreadyConnecting,

    #[error("No test accounts available")]
    NoAccounts,

    /// Account lookup failed on the service
    #[error("Failed to connect wallet: {0}")]
    Service(String),

    #[error("Wallet not connected")]
    NotConnected,

    /// Disconnected while the account lookup was in flight
    #[error("Wallet connection cancelled")]
    Cancelled,
}

/// Wallet connection status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    Disconnected,
    Connecting,
    Connected,
}

struct WalletState {
    status: WalletStatus,
    address: Option<AztecAddress>,
    balance: Option<String>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            status: WalletStatus::Disconnected,
            address: None,
            balance: None,
        }
    }
}

pub struct WalletSessionProvider {
    network: Arc<NetworkClientProvider>,
    store: Arc<dyn SessionStore>,
    notifications: Arc<NotificationCenter>,
    state: RwLock<WalletState>,
    mounted: AtomicBool,
}

impl WalletSessionProvider {
    pub fn new(
        network: Arc<NetworkClientProvider>,
        store: Arc<dyn SessionStore>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            network,
            store,
            notifications,
            state: RwLock::new(WalletState::default()),
            mounted: AtomicBool::new(false),
        }
    }

    /// Surface the network's last error and reconnect if the previous session
    /// asked to stay connected. Runs once per provider.
    #[instrument(skip(self))]
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("[WALLET] Already mounted");
            return;
        }

        if let Some(err) = self.network.error() {
            self.notifications.error(format!("PXE connection error: {err}"));
        }

        if self.store.load_connected() && self.network.is_connected() {
            info!("[WALLET] Restoring previous session");
            if let Err(e) = self.connect().await {
                debug!("[WALLET] Session not restored: {}", e);
            }
        }
    }

    /// Connect as the first pre-provisioned account.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<AztecAddress, WalletError> {
        let Some(client) = self.network.client() else {
            warn!("[WALLET] Connect rejected: PXE service not connected");
            self.notifications.error(WalletError::ServiceNotConnected.to_string());
            return Err(WalletError::ServiceNotConnected);
        };

        {
            let mut state = self.state.write();
            if state.status == WalletStatus::Connecting {
                warn!("[WALLET] Connect rejected: already connecting");
                return Err(WalletError::AlreadyConnecting);
            }
            state.status = WalletStatus::Connecting;
        }

        let selected = match client.initial_test_accounts().await {
            Ok(accounts) => accounts.into_iter().next().ok_or(WalletError::NoAccounts),
            Err(e) => Err(WalletError::Service(e.to_string())),
        };

        match selected {
            Ok(address) => {
                {
                    let mut state = self.state.write();
                    if state.status != WalletStatus::Connecting {
                        info!(%address, "[WALLET] Connect superseded by disconnect");
                        return Err(WalletError::Cancelled);
                    }
                    state.status = WalletStatus::Connected;
                    state.address = Some(address);
                    state.balance = Some(PLACEHOLDER_BALANCE.to_string());
                }
                if let Err(e) = self.store.store_connected() {
                    warn!("[WALLET] Failed to persist session flag: {}", e);
                }
                info!(%address, "[WALLET] Connected");
                self.notifications.success("Wallet connected successfully");
                Ok(address)
            }
            Err(e) => {
                error!("[WALLET] Failed to connect wallet: {}", e);
                *self.state.write() = WalletState::default();
                self.notifications.error("Failed to connect wallet");
                Err(e)
            }
        }
    }

    /// Forget the selected account and the persisted flag.
    #[instrument(skip(self))]
    pub fn disconnect(&self) {
        *self.state.write() = WalletState::default();
        if let Err(e) = self.store.clear() {
            warn!("[WALLET] Failed to clear session flag: {}", e);
        }
        info!("[WALLET] Disconnected");
        self.notifications.info("Wallet disconnected");
    }

    pub fn status(&self) -> WalletStatus {
        self.state.read().status
    }

    pub fn is_connected(&self) -> bool {
        self.status() == WalletStatus::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.status() == WalletStatus::Connecting
    }

    pub fn address(&self) -> Option<AztecAddress> {
        self.state.read().address
    }

    pub fn balance(&self) -> Option<String> {
        self.state.read().balance.clone()
    }

    /// Whether the persisted "stay connected" flag is set.
    pub fn persisted(&self) -> bool {
        self.store.load_connected()
    }

    /// Connected account, for operations that act on its behalf.
    pub fn require_address(&self) -> Result<AztecAddress, WalletError> {
        self.address().ok_or(WalletError::NotConnected)
    }

    pub fn network(&self) -> &Arc<NetworkClientProvider> {
        &self.network
    }
}
