//! # NFT Collection Contract
//!
//! Handle over a deployed NFT collection. Every marketplace action exists in a
//! public and a private flavour; [`Visibility`] picks which of the two contract
//! entry points an action dispatches to.
//!
//! | Action          | Public                | Private                |
//! |-----------------|-----------------------|------------------------|
//! | Mint            | `mint`                | `privateMint`          |
//! | Transfer        | `publicTransfer`      | `privateTransfer`      |
//! | List            | `publicList`          | `privateList`          |
//! | CancelListing   | `publicCancelListing` | `privateCancelListing` |
//! | Buy             | `publicBuy`           | `privateBuy`           |
//!
//! `verifyOwnership` (simulated) and `bridgeToL1` have a single entry point.

use crate::error::PxeError;
use crate::service::{ContractCall, DeployRequest, NetworkService};
use crate::types::{AztecAddress, EthAddress, TokenId, TxReceipt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

/// Artifact name the service deploys collections from.
pub const NFT_ARTIFACT: &str = "NFT";

/// Image used when a private mint carries no image.
pub const DEFAULT_IMAGE_URL: &str = "https://placeholder.com/nft";

/// Whether an action is disclosed on the public ledger or kept in private state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn from_private_flag(is_private: bool) -> Self {
        if is_private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }

    /// "Public" / "Private"
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }

    /// "publicly" / "privately"
    pub fn adverb(&self) -> &'static str {
        match self {
            Visibility::Public => "publicly",
            Visibility::Private => "privately",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        })
    }
}

/// Marketplace actions that come in a public and a private variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NftAction {
    Mint,
    Transfer,
    List,
    CancelListing,
    Buy,
}

impl NftAction {
    /// Contract method implementing this action under `visibility`.
    pub fn entry_point(&self, visibility: Visibility) -> &'static str {
        match (self, visibility) {
            (NftAction::Mint, Visibility::Public) => "mint",
            (NftAction::Mint, Visibility::Private) => "privateMint",
            (NftAction::Transfer, Visibility::Public) => "publicTransfer",
            (NftAction::Transfer, Visibility::Private) => "privateTransfer",
            (NftAction::List, Visibility::Public) => "publicList",
            (NftAction::List, Visibility::Private) => "privateList",
            (NftAction::CancelListing, Visibility::Public) => "publicCancelListing",
            (NftAction::CancelListing, Visibility::Private) => "privateCancelListing",
            (NftAction::Buy, Visibility::Public) => "publicBuy",
            (NftAction::Buy, Visibility::Private) => "privateBuy",
        }
    }
}

/// Token metadata carried by private mints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl NftMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

/// Deployed NFT collection bound to a network service.
#[derive(Clone)]
pub struct NftContract {
    address: AztecAddress,
    service: Arc<dyn NetworkService>,
}

impl fmt::Debug for NftContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NftContract")
            .field("address", &self.address)
            .field("service", &self.service.url())
            .finish()
    }
}

impl NftContract {
    /// Bind to an already deployed collection.
    pub fn at(address: AztecAddress, service: Arc<dyn NetworkService>) -> Self {
        Self { address, service }
    }

    /// Deploy a new collection with `deployer` as admin.
    #[instrument(skip(service), fields(deployer = %deployer))]
    pub async fn deploy(
        service: Arc<dyn NetworkService>,
        deployer: AztecAddress,
        name: &str,
        symbol: &str,
    ) -> Result<Self, PxeError> {
        let request = DeployRequest {
            artifact: NFT_ARTIFACT.to_string(),
            deployer,
            args: vec![json!(deployer), json!(name), json!(symbol)],
            salt: random_salt(),
        };

        let address = service.deploy_contract(request).await?;
        info!(%address, name, symbol, "NFT collection deployed");

        Ok(Self { address, service })
    }

    pub fn address(&self) -> AztecAddress {
        self.address
    }

    fn call(&self, method: &str, from: AztecAddress, args: Vec<Value>) -> ContractCall {
        ContractCall {
            contract: self.address,
            method: method.to_string(),
            args,
            from,
        }
    }

    /// Build the mint call for `visibility`.
    ///
    /// Public mints only take recipient and token id; metadata lives in private notes.
    pub fn mint_call(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        recipient: AztecAddress,
        token_id: TokenId,
        metadata: &NftMetadata,
    ) -> ContractCall {
        let method = NftAction::Mint.entry_point(visibility);
        let args = match visibility {
            Visibility::Public => vec![json!(recipient), json!(token_id)],
            Visibility::Private => vec![json!(recipient), json!(metadata), json!(from)],
        };
        self.call(method, from, args)
    }

    pub fn transfer_call(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        token_id: TokenId,
        recipient: AztecAddress,
    ) -> ContractCall {
        self.call(
            NftAction::Transfer.entry_point(visibility),
            from,
            vec![json!(token_id), json!(recipient), json!(from)],
        )
    }

    pub fn list_call(&self, visibility: Visibility, from: AztecAddress, token_id: TokenId, price: u128) -> ContractCall {
        self.call(
            NftAction::List.entry_point(visibility),
            from,
            vec![json!(token_id), json!(price.to_string()), json!(from)],
        )
    }

    pub fn cancel_listing_call(&self, visibility: Visibility, from: AztecAddress, token_id: TokenId) -> ContractCall {
        self.call(
            NftAction::CancelListing.entry_point(visibility),
            from,
            vec![json!(token_id), json!(from)],
        )
    }

    pub fn buy_call(&self, visibility: Visibility, from: AztecAddress, token_id: TokenId, price: u128) -> ContractCall {
        self.call(
            NftAction::Buy.entry_point(visibility),
            from,
            vec![json!(token_id), json!(price.to_string()), json!(from)],
        )
    }

    pub fn verify_ownership_call(&self, from: AztecAddress, token_id: TokenId, owner: AztecAddress) -> ContractCall {
        self.call("verifyOwnership", from, vec![json!(token_id), json!(owner), json!(from)])
    }

    pub fn bridge_call(&self, from: AztecAddress, token_id: TokenId, l1_address: EthAddress) -> ContractCall {
        self.call("bridgeToL1", from, vec![json!(token_id), json!(l1_address), json!(from)])
    }

    async fn send(&self, call: ContractCall) -> Result<TxReceipt, PxeError> {
        let method = call.method.clone();
        let receipt = self.service.send(call).await?.ensure_success()?;
        info!(contract = %self.address, method, tx_hash = %receipt.tx_hash, "transaction mined");
        Ok(receipt)
    }

    pub async fn mint(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        recipient: AztecAddress,
        token_id: TokenId,
        metadata: &NftMetadata,
    ) -> Result<TxReceipt, PxeError> {
        self.send(self.mint_call(visibility, from, recipient, token_id, metadata)).await
    }

    pub async fn transfer(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        token_id: TokenId,
        recipient: AztecAddress,
    ) -> Result<TxReceipt, PxeError> {
        self.send(self.transfer_call(visibility, from, token_id, recipient)).await
    }

    pub async fn list(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        token_id: TokenId,
        price: u128,
    ) -> Result<TxReceipt, PxeError> {
        self.send(self.list_call(visibility, from, token_id, price)).await
    }

    pub async fn cancel_listing(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        token_id: TokenId,
    ) -> Result<TxReceipt, PxeError> {
        self.send(self.cancel_listing_call(visibility, from, token_id)).await
    }

    pub async fn buy(
        &self,
        visibility: Visibility,
        from: AztecAddress,
        token_id: TokenId,
        price: u128,
    ) -> Result<TxReceipt, PxeError> {
        self.send(self.buy_call(visibility, from, token_id, price)).await
    }

    /// Ask the contract whether `owner` holds `token_id`. Simulated, nothing is submitted.
    pub async fn verify_ownership(
        &self,
        from: AztecAddress,
        token_id: TokenId,
        owner: AztecAddress,
    ) -> Result<bool, PxeError> {
        let value = self
            .service
            .simulate(self.verify_ownership_call(from, token_id, owner))
            .await?;
        Ok(truthy(&value))
    }

    pub async fn bridge_to_l1(
        &self,
        from: AztecAddress,
        token_id: TokenId,
        l1_address: EthAddress,
    ) -> Result<TxReceipt, PxeError> {
        self.send(self.bridge_call(from, token_id, l1_address)).await
    }
}

/// Field-element salt with the top byte cleared so it stays below the modulus.
fn random_salt() -> String {
    let mut bytes: [u8; 32] = rand::random();
    bytes[0] = 0;
    format!("0x{}", hex::encode(bytes))
}

/// Interpret a simulation result as a boolean.
///
/// Simulations return booleans either bare, as field elements (`"0x01"`, `1`)
/// or wrapped as `{ "value": ... }`.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                return true;
            }
            match s.strip_prefix("0x") {
                Some(digits) => digits.chars().any(|c| c != '0'),
                None => s.parse::<u128>().map(|n| n != 0).unwrap_or(false),
            }
        }
        Value::Object(map) => map.get("value").map(truthy).unwrap_or(false),
        Value::Array(_) | Value::Null => false,
    }
}
