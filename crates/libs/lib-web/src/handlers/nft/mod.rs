//! # NFT Handlers
//!
//! HTTP endpoints for deploying collections and minting tokens.
//!
//! ## Endpoints
//!
//! - `POST /api/deploy-nft` - Deploy a new NFT collection
//! - `POST /api/mint-nft` - Mint a token on the configured collection
//!
//! ## Request Examples
//!
//! ```bash
//! curl -X POST http://localhost:3001/api/deploy-nft \
//!   -H 'content-type: application/json' \
//!   -d '{"name":"Night Owls","symbol":"OWL"}'
//!
//! curl -X POST http://localhost:3001/api/mint-nft \
//!   -H 'content-type: application/json' \
//!   -d '{"name":"Owl #1","description":"first owl","recipientAddress":"0x...","isPrivate":true}'
//! ```
//!
//! Errors come back as `{"error": "<message>"}` with 400 for bad input (malformed
//! JSON included) and 500 for everything else, including PXE and contract failures.

use crate::services::nft::NftService;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use lib_aztec::NetworkService;
use lib_core::{Config, Result};
use shared::dto::{DeployNftRequest, DeployNftResponse, MintNftRequest, MintNftResponse};
use std::sync::Arc;
use tracing::{info, instrument};

/// Deploy an NFT collection.
///
/// **Route**: `POST /api/deploy-nft`
///
/// Success (200): `{"address": "0x...", "name": "...", "symbol": "..."}`
///
/// Error (400): `Name and symbol are required`, or an unreadable body
/// Error (500): deployment failed
#[instrument(skip(pxe, body))]
pub async fn deploy_nft(
    State(pxe): State<Arc<dyn NetworkService>>,
    body: std::result::Result<Json<DeployNftRequest>, JsonRejection>,
) -> Result<Json<DeployNftResponse>> {
    let Json(req) = body?;
    info!("[NFT] Deploy request: {} ({})", req.name, req.symbol);

    let response = NftService::new(pxe).deploy(req).await?;

    info!("[NFT] Collection deployed at {}", response.address);
    Ok(Json(response))
}

/// Mint a token on the configured collection.
///
/// **Route**: `POST /api/mint-nft`
///
/// Success (200): `{"success": true, "tokenId": "...", "recipient": "0x...", "isPrivate": false}`
///
/// Error (400): missing name/description/recipient, or malformed recipient
/// Error (500): `NFT contract address not configured`, or minting failed
#[instrument(skip(pxe, config, body))]
pub async fn mint_nft(
    State(pxe): State<Arc<dyn NetworkService>>,
    State(config): State<Config>,
    body: std::result::Result<Json<MintNftRequest>, JsonRejection>,
) -> Result<Json<MintNftResponse>> {
    let Json(req) = body?;
    info!("[NFT] Mint request for {} (private: {})", req.recipient_address, req.is_private);

    let response = NftService::new(pxe)
        .mint(req, config.nft_contract_address.as_deref())
        .await?;

    info!("[NFT] Minted token {}", response.token_id);
    Ok(Json(response))
}

#[cfg(test)]
mod tests;
