//! # Network Service Trait
//!
//! The seam between the marketplace and the external SDK. Everything the
//! marketplace needs from the network-execution service goes through
//! [`NetworkService`], which lets the session providers and HTTP handlers be
//! tested against an in-memory implementation.

use crate::error::PxeError;
use crate::types::{AztecAddress, NodeInfo, TxReceipt};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One contract method invocation, executed either as a transaction
/// ([`NetworkService::send`]) or as a read-only simulation
/// ([`NetworkService::simulate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    pub contract: AztecAddress,
    pub method: String,
    pub args: Vec<Value>,
    /// Account the call is made from
    pub from: AztecAddress,
}

/// Contract deployment parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    /// Name of a contract artifact known to the service
    pub artifact: String,
    pub deployer: AztecAddress,
    /// Constructor arguments
    pub args: Vec<Value>,
    /// Address salt, `0x`-prefixed field element
    pub salt: String,
}

#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Service endpoint, for logs and status display
    fn url(&self) -> &str;

    /// Node and chain identity
    async fn node_info(&self) -> Result<NodeInfo, PxeError>;

    /// Accounts already registered with the service
    async fn registered_accounts(&self) -> Result<Vec<AztecAddress>, PxeError>;

    /// Pre-provisioned sandbox accounts
    async fn initial_test_accounts(&self) -> Result<Vec<AztecAddress>, PxeError>;

    /// Deploy a contract and wait until it is mined
    async fn deploy_contract(&self, request: DeployRequest) -> Result<AztecAddress, PxeError>;

    /// Send a transaction and wait for its receipt
    async fn send(&self, call: ContractCall) -> Result<TxReceipt, PxeError>;

    /// Simulate a call without submitting it
    async fn simulate(&self, call: ContractCall) -> Result<Value, PxeError>;
}
