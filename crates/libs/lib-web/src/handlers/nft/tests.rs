use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_aztec::mock::MockNetworkService;
use lib_aztec::{AztecAddress, NetworkService};
use lib_core::Config;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn contract_address() -> String {
    AztecAddress::from_low_u64(0xc0ffee).to_string()
}

fn test_config(with_contract: bool) -> Config {
    Config {
        nft_contract_address: with_contract.then(contract_address),
        ..Default::default()
    }
}

fn test_app(mock: Arc<MockNetworkService>, config: Config) -> Router {
    let pxe: Arc<dyn NetworkService> = mock;
    create_router(AppState { config, pxe }, vec!["http://localhost:3000".to_string()])
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_deploy_requires_name_and_symbol() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(false));

    let (status, body) = post_json(app, "/api/deploy-nft", json!({ "name": "Owls" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and symbol are required");
    assert!(mock.deployments().is_empty());
}

#[tokio::test]
async fn test_deploy_malformed_body_is_json_error() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(false));

    let (status, body) = post_raw(app, "/api/deploy-nft", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("JSON"));
    assert!(mock.deployments().is_empty());
}

#[tokio::test]
async fn test_deploy_success() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(false));

    let (status, body) =
        post_json(app, "/api/deploy-nft", json!({ "name": "Owls", "symbol": "OWL" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Owls");
    assert_eq!(body["symbol"], "OWL");
    assert!(body["address"].as_str().unwrap().starts_with("0x"));

    let deployments = mock.deployments();
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0].deployer, AztecAddress::from_low_u64(0xa1));
}

#[tokio::test]
async fn test_deploy_reports_pxe_failure() {
    let mock = Arc::new(MockNetworkService::unreachable());
    let app = test_app(mock, test_config(false));

    let (status, body) =
        post_json(app, "/api/deploy-nft", json!({ "name": "Owls", "symbol": "OWL" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_mint_requires_fields() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock, test_config(true));

    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": "Owl", "recipientAddress": contract_address() }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, description, and recipient address are required");
}

#[tokio::test]
async fn test_mint_null_field_counts_as_missing() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(true));

    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": null, "description": "d", "recipientAddress": contract_address() }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, description, and recipient address are required");
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_mint_wrong_field_type_is_json_error() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock, test_config(true));

    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": 5, "description": "d", "recipientAddress": contract_address() }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_mint_rejects_malformed_recipient() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(true));

    let (status, _) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": "Owl", "description": "d", "recipientAddress": "0x1234" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_mint_without_contract_address() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock, test_config(false));

    let recipient = AztecAddress::from_low_u64(7).to_string();
    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": "Owl", "description": "d", "recipientAddress": recipient }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "NFT contract address not configured");
}

#[tokio::test]
async fn test_private_mint_dispatches_private_entry_point() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(true));

    let recipient = AztecAddress::from_low_u64(7).to_string();
    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({
            "name": "Owl",
            "description": "night bird",
            "recipientAddress": recipient,
            "isPrivate": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["isPrivate"], true);
    assert_eq!(body["recipient"], recipient);
    assert!(body["tokenId"].as_str().unwrap().parse::<u128>().is_ok());

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "privateMint");
    assert_eq!(calls[0].contract.to_string(), contract_address());
    assert_eq!(calls[0].args[1]["image"], "https://placeholder.com/nft");
}

#[tokio::test]
async fn test_public_mint_uses_token_id() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock.clone(), test_config(true));

    let recipient = AztecAddress::from_low_u64(7).to_string();
    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": "Owl", "description": "d", "recipientAddress": recipient }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let calls = mock.calls();
    assert_eq!(calls[0].method, "mint");
    assert_eq!(calls[0].args[1], body["tokenId"]);
}

#[tokio::test]
async fn test_reverted_mint_is_server_error() {
    let mock = Arc::new(MockNetworkService::new());
    mock.set_fail_sends(true);
    let app = test_app(mock, test_config(true));

    let recipient = AztecAddress::from_low_u64(7).to_string();
    let (status, body) = post_json(
        app,
        "/api/mint-nft",
        json!({ "name": "Owl", "description": "d", "recipientAddress": recipient }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Assertion failed"));
}

#[tokio::test]
async fn test_health_is_stamped() {
    let mock = Arc::new(MockNetworkService::new());
    let app = test_app(mock, test_config(false));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
