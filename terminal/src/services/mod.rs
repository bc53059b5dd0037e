//! # Services Module
//!
//! External service integrations for the marketplace client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── pxe.rs       - NetworkClientProvider
//! │                  (connection to the network-execution service, accounts, chain id)
//! ├── wallet.rs    - WalletSessionProvider
//! │                  (account selection, connect/disconnect, auto-reconnect)
//! ├── storage.rs   - Persisted "stay connected" flag
//! ├── nft.rs       - NFT operations (mint, transfer, list, cancel, buy, verify, bridge)
//! └── api/         - Deploy/mint HTTP API client
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Terminal CLI                        │
//! │                                                         │
//! │  NftService ──► WalletSessionProvider ──► NetworkClient │
//! │                        │                   Provider     │
//! │                        ▼                      │         │
//! │                  SessionStore                 │         │
//! │  ApiClient                                    │         │
//! └─────┼─────────────────────────────────────────┼─────────┘
//!       │ HTTP/JSON                               │ JSON-RPC
//!       ▼                                         ▼
//! ┌─────────────────────┐         ┌─────────────────────────┐
//! │  Backend API Server │ ──────► │  PXE (Aztec Sandbox)    │
//! │  /api/deploy-nft    │         │  node info, accounts,   │
//! │  /api/mint-nft      │         │  deploy, send, simulate │
//! └─────────────────────┘         └─────────────────────────┘
//! ```

pub mod api;
pub mod nft;
pub mod pxe;
pub mod storage;
pub mod wallet;

pub use api::ApiClient;
pub use nft::{MintedNft, NftService};
pub use pxe::{ConnectionStatus, NetworkClientProvider};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
pub use wallet::{WalletError, WalletSessionProvider, WalletStatus};
