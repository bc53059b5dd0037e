//! In-memory [`NetworkService`] for tests.
//!
//! Records every deployment and call so tests can assert on what was dispatched.

use crate::error::PxeError;
use crate::service::{ContractCall, DeployRequest, NetworkService};
use crate::types::{AztecAddress, NodeInfo, TxReceipt, TxStatus};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub const MOCK_CHAIN_ID: u64 = 31337;

pub struct MockNetworkService {
    reachable: AtomicBool,
    fail_accounts: AtomicBool,
    fail_sends: AtomicBool,
    accounts: Mutex<Vec<AztecAddress>>,
    test_accounts: Mutex<Vec<AztecAddress>>,
    simulate_result: Mutex<Value>,
    calls: Mutex<Vec<ContractCall>>,
    deployments: Mutex<Vec<DeployRequest>>,
    node_info_calls: AtomicU64,
    next_address: AtomicU64,
}

impl Default for MockNetworkService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNetworkService {
    /// Reachable service with two registered accounts and three test accounts.
    pub fn new() -> Self {
        Self {
            reachable: AtomicBool::new(true),
            fail_accounts: AtomicBool::new(false),
            fail_sends: AtomicBool::new(false),
            accounts: Mutex::new(vec![AztecAddress::from_low_u64(1), AztecAddress::from_low_u64(2)]),
            test_accounts: Mutex::new(vec![
                AztecAddress::from_low_u64(0xa1),
                AztecAddress::from_low_u64(0xa2),
                AztecAddress::from_low_u64(0xa3),
            ]),
            simulate_result: Mutex::new(Value::Bool(true)),
            calls: Mutex::new(Vec::new()),
            deployments: Mutex::new(Vec::new()),
            node_info_calls: AtomicU64::new(0),
            next_address: AtomicU64::new(0xc0_0000),
        }
    }

    /// Service that refuses every call with a transport error.
    pub fn unreachable() -> Self {
        let mock = Self::new();
        mock.set_reachable(false);
        mock
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn set_fail_accounts(&self, fail: bool) {
        self.fail_accounts.store(fail, Ordering::SeqCst);
    }

    /// Make every sent transaction revert.
    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn set_accounts(&self, accounts: Vec<AztecAddress>) {
        *self.accounts.lock() = accounts;
    }

    pub fn set_test_accounts(&self, accounts: Vec<AztecAddress>) {
        *self.test_accounts.lock() = accounts;
    }

    pub fn set_simulate_result(&self, value: Value) {
        *self.simulate_result.lock() = value;
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().clone()
    }

    pub fn deployments(&self) -> Vec<DeployRequest> {
        self.deployments.lock().clone()
    }

    pub fn node_info_calls(&self) -> u64 {
        self.node_info_calls.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> Result<(), PxeError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(PxeError::Transport("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl NetworkService for MockNetworkService {
    fn url(&self) -> &str {
        "mock://pxe"
    }

    async fn node_info(&self) -> Result<NodeInfo, PxeError> {
        self.node_info_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        Ok(NodeInfo {
            node_version: "mock".to_string(),
            l1_chain_id: MOCK_CHAIN_ID,
            rollup_version: Some(1),
            protocol_contract_tree_root: None,
        })
    }

    async fn registered_accounts(&self) -> Result<Vec<AztecAddress>, PxeError> {
        self.check_reachable()?;
        if self.fail_accounts.load(Ordering::SeqCst) {
            return Err(PxeError::Rpc {
                code: -32603,
                message: "account store unavailable".to_string(),
            });
        }
        Ok(self.accounts.lock().clone())
    }

    async fn initial_test_accounts(&self) -> Result<Vec<AztecAddress>, PxeError> {
        self.check_reachable()?;
        Ok(self.test_accounts.lock().clone())
    }

    async fn deploy_contract(&self, request: DeployRequest) -> Result<AztecAddress, PxeError> {
        self.check_reachable()?;
        self.deployments.lock().push(request);
        Ok(AztecAddress::from_low_u64(self.next_address.fetch_add(1, Ordering::SeqCst)))
    }

    async fn send(&self, call: ContractCall) -> Result<TxReceipt, PxeError> {
        self.check_reachable()?;
        let n = {
            let mut calls = self.calls.lock();
            calls.push(call);
            calls.len()
        };

        let (status, error) = if self.fail_sends.load(Ordering::SeqCst) {
            (TxStatus::AppLogicReverted, Some("Assertion failed".to_string()))
        } else {
            (TxStatus::Success, None)
        };

        Ok(TxReceipt {
            tx_hash: format!("0x{n:064x}"),
            status,
            block_number: Some(n as u64),
            error,
        })
    }

    async fn simulate(&self, call: ContractCall) -> Result<Value, PxeError> {
        self.check_reachable()?;
        self.calls.lock().push(call);
        Ok(self.simulate_result.lock().clone())
    }
}
