//! # Aztec Library
//!
//! Boundary to the external Aztec SDK as exposed by the network-execution service (PXE):
//! JSON-RPC client, typed addresses and receipts, the [`NetworkService`] trait and the
//! NFT collection contract handle.
//!
//! Nothing here re-implements the SDK. Proving, note encryption and transaction
//! propagation stay behind the service; this crate only shapes requests and results.

pub mod client;
pub mod contracts;
pub mod error;
pub mod service;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types from root for convenience
pub use client::PxeClient;
pub use contracts::{NftAction, NftContract, NftMetadata, Visibility};
pub use error::PxeError;
pub use service::{ContractCall, DeployRequest, NetworkService};
pub use types::{AztecAddress, EthAddress, NodeInfo, TokenId, TxReceipt, TxStatus};
