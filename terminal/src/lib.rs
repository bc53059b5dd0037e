//! # Private NFT Marketplace Client - Library Root
//!
//! Client for an NFT marketplace on the Aztec privacy rollup. It connects to
//! the local network-execution service (PXE), selects a sandbox account as the
//! wallet, and performs marketplace actions in public or private form.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  clap          - Command line                          │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client (API server, PXE)         │
//! │  parking_lot   - Provider state                        │
//! │  tracing       - File logging                          │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ JSON-RPC
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Backend API    │          │   PXE (Aztec Sandbox)   │
//! │  (Axum server)  │          │                         │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`](app::App) orchestrator and the notification centre
//! - **cli**: command parsing and dispatch
//! - **config**: [`ClientConfig`](config::ClientConfig) from the environment
//! - **core**: error type and service traits
//! - **debug**: file logging
//! - **services**: network and wallet providers, session storage, NFT operations, API client
//! - **utils**: input validation
//!
//! ### Provider Dependency Graph
//!
//! ```text
//! NftService ──► WalletSessionProvider ──► NetworkClientProvider
//!                       │
//!                       └──► SessionStore
//! ```
//!
//! Providers are shared as `Arc`s and passed down explicitly; there is no
//! global state.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;
