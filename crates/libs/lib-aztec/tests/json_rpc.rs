//! PxeClient against a local JSON-RPC stub.

use axum::{routing::post, Json, Router};
use lib_aztec::{AztecAddress, NetworkService, PxeClient, PxeError, TokenId, TxStatus};
use lib_aztec::{NftContract, Visibility};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

fn addr(n: u64) -> String {
    AztecAddress::from_low_u64(n).to_string()
}

async fn handle(Json(req): Json<Value>) -> Json<Value> {
    let id = req["id"].clone();
    let method = req["method"].as_str().unwrap_or_default();

    let result = match method {
        "pxe_getNodeInfo" => json!({ "nodeVersion": "0.76.4", "l1ChainId": 31337 }),
        "pxe_getRegisteredAccounts" => json!([addr(1), { "address": addr(2), "publicKeys": "0x" }]),
        "wallet_getInitialTestAccounts" => json!([{ "address": addr(0xa1) }]),
        "contract_deploy" => json!({ "address": addr(0xc0) }),
        "contract_send" => {
            let call = &req["params"][0];
            if call["method"] == "privateBuy" {
                return Json(json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": { "code": -32000, "message": "Assertion failed: listing not found" }
                }));
            }
            json!({ "txHash": "0xabc", "status": "success", "blockNumber": 12 })
        }
        "contract_simulate" => json!({ "value": true }),
        _ => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": "method not found" }
            }))
        }
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

async fn spawn_stub() -> String {
    let app = Router::new().route("/", post(handle));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let local = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{local}")
}

#[tokio::test]
async fn node_info_and_accounts() {
    let url = spawn_stub().await;
    let client = PxeClient::new(&url, Duration::from_secs(5)).unwrap();

    let info = client.node_info().await.unwrap();
    assert_eq!(info.l1_chain_id, 31337);

    let accounts = client.registered_accounts().await.unwrap();
    assert_eq!(accounts, vec![AztecAddress::from_low_u64(1), AztecAddress::from_low_u64(2)]);

    let test_accounts = client.initial_test_accounts().await.unwrap();
    assert_eq!(test_accounts, vec![AztecAddress::from_low_u64(0xa1)]);
}

#[tokio::test]
async fn contract_flow_over_rpc() {
    let url = spawn_stub().await;
    let client: Arc<dyn NetworkService> = Arc::new(PxeClient::new(&url, Duration::from_secs(5)).unwrap());
    let me = AztecAddress::from_low_u64(1);

    let nft = NftContract::deploy(client, me, "Owls", "OWL").await.unwrap();
    assert_eq!(nft.address(), AztecAddress::from_low_u64(0xc0));

    let receipt = nft.list(Visibility::Public, me, TokenId(1), 100).await.unwrap();
    assert_eq!(receipt.status, TxStatus::Success);

    assert!(nft.verify_ownership(me, TokenId(1), me).await.unwrap());

    let err = nft.buy(Visibility::Private, me, TokenId(1), 100).await.unwrap_err();
    match err {
        PxeError::Rpc { message, .. } => assert!(message.contains("listing not found")),
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_method_is_rpc_error() {
    let url = spawn_stub().await;
    let client = PxeClient::new(&url, Duration::from_secs(5)).unwrap();

    let err = client.request::<Value>("pxe_nope", json!([])).await.unwrap_err();
    assert!(matches!(err, PxeError::Rpc { code: -32601, .. }));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = PxeClient::new(&url, Duration::from_secs(2)).unwrap();
    let err = client.node_info().await.unwrap_err();
    assert!(err.is_unreachable());
}
