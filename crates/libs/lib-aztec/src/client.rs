//! # PXE JSON-RPC Client
//!
//! HTTP client for the Aztec network-execution service (PXE).
//!
//! ## Protocol
//!
//! Every operation is a JSON-RPC 2.0 request `POST`ed to the service URL:
//!
//! ```text
//! → {"jsonrpc":"2.0","id":1,"method":"pxe_getNodeInfo","params":[]}
//! ← {"jsonrpc":"2.0","id":1,"result":{"nodeVersion":"0.76.4","l1ChainId":31337}}
//! ```
//!
//! ## Methods
//!
//! | Method                          | Used by                                  |
//! |---------------------------------|------------------------------------------|
//! | `pxe_getNodeInfo`               | [`NetworkService::node_info`]            |
//! | `pxe_getRegisteredAccounts`     | [`NetworkService::registered_accounts`]  |
//! | `wallet_getInitialTestAccounts` | [`NetworkService::initial_test_accounts`]|
//! | `contract_deploy`               | [`NetworkService::deploy_contract`]      |
//! | `contract_send`                 | [`NetworkService::send`]                 |
//! | `contract_simulate`             | [`NetworkService::simulate`]             |
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_aztec::{NetworkService, PxeClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), lib_aztec::PxeError> {
//! let pxe = PxeClient::new("http://localhost:8080", Duration::from_secs(30))?;
//! let info = pxe.node_info().await?;
//! println!("Connected to PXE on chain {}", info.l1_chain_id);
//! # Ok(())
//! # }
//! ```
//!
//! There is no retry and no readiness polling: a failed call is reported to the
//! caller, which decides what to surface to the user.

use crate::error::PxeError;
use crate::service::{ContractCall, DeployRequest, NetworkService};
use crate::types::{AztecAddress, NodeInfo, TxReceipt};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};

pub const METHOD_NODE_INFO: &str = "pxe_getNodeInfo";
pub const METHOD_REGISTERED_ACCOUNTS: &str = "pxe_getRegisteredAccounts";
pub const METHOD_TEST_ACCOUNTS: &str = "wallet_getInitialTestAccounts";
pub const METHOD_DEPLOY: &str = "contract_deploy";
pub const METHOD_SEND: &str = "contract_send";
pub const METHOD_SIMULATE: &str = "contract_simulate";

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Account entries come back either as bare address strings or as
/// complete-address objects carrying an `address` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum AccountEntry {
    Bare(AztecAddress),
    Complete { address: AztecAddress },
}

impl AccountEntry {
    fn address(self) -> AztecAddress {
        match self {
            AccountEntry::Bare(address) | AccountEntry::Complete { address } => address,
        }
    }
}

#[derive(Deserialize)]
struct DeployResult {
    address: AztecAddress,
}

/// JSON-RPC client bound to one network-execution service.
pub struct PxeClient {
    http: Client,
    url: String,
    next_id: AtomicU64,
}

impl PxeClient {
    /// Create a client for `url`. No request is made until the first call.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, PxeError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PxeError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Issue one JSON-RPC request and decode its `result`.
    #[instrument(skip(self, params), fields(url = %self.url))]
    pub async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, PxeError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        debug!(id, method, "[PXE] request");

        let response = self.http.post(&self.url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PxeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| PxeError::Decode(format!("{method}: {e}")))?;

        if let Some(err) = envelope.error {
            return Err(PxeError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        let result = envelope.result.unwrap_or(Value::Null);
        serde_json::from_value(result).map_err(|e| PxeError::Decode(format!("{method}: {e}")))
    }

    async fn accounts(&self, method: &str) -> Result<Vec<AztecAddress>, PxeError> {
        let entries: Vec<AccountEntry> = self.request(method, json!([])).await?;
        Ok(entries.into_iter().map(AccountEntry::address).collect())
    }
}

#[async_trait]
impl NetworkService for PxeClient {
    fn url(&self) -> &str {
        &self.url
    }

    async fn node_info(&self) -> Result<NodeInfo, PxeError> {
        self.request(METHOD_NODE_INFO, json!([])).await
    }

    async fn registered_accounts(&self) -> Result<Vec<AztecAddress>, PxeError> {
        self.accounts(METHOD_REGISTERED_ACCOUNTS).await
    }

    async fn initial_test_accounts(&self) -> Result<Vec<AztecAddress>, PxeError> {
        self.accounts(METHOD_TEST_ACCOUNTS).await
    }

    async fn deploy_contract(&self, request: DeployRequest) -> Result<AztecAddress, PxeError> {
        let result: DeployResult = self.request(METHOD_DEPLOY, json!([request])).await?;
        Ok(result.address)
    }

    async fn send(&self, call: ContractCall) -> Result<TxReceipt, PxeError> {
        self.request(METHOD_SEND, json!([call])).await
    }

    async fn simulate(&self, call: ContractCall) -> Result<Value, PxeError> {
        self.request(METHOD_SIMULATE, json!([call])).await
    }
}
