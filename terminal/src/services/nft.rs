//! # NFT Operations
//!
//! Marketplace actions on the configured collection, performed as the
//! connected wallet account. Each action takes a [`Visibility`] and dispatches
//! to the matching public or private contract entry point.
//!
//! Every operation:
//! 1. Requires a loaded contract (`"Contract not initialized"`) and a connected
//!    wallet (`"Wallet not initialized"`)
//! 2. Validates its inputs
//! 3. Raises pending / success / error notifications around the transaction
//!
//! Results come from the service; nothing here is simulated locally.

use crate::app::notifications::{NotificationCenter, ProgressMessages};
use crate::core::error::{AppError, Result};
use crate::services::wallet::WalletSessionProvider;
use crate::utils::validation::{validate_address, validate_l1_address, validate_price, validate_token_id, ValidationResult};
use lib_aztec::{AztecAddress, EthAddress, NftContract, NftMetadata, PxeError, TokenId, TxReceipt, Visibility};
use lib_utils::time::now_millis;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info, instrument};

pub const CONTRACT_NOT_INITIALIZED: &str = "Contract not initialized";
pub const WALLET_NOT_INITIALIZED: &str = "Wallet not initialized";

/// Result of a successful mint.
#[derive(Debug, Clone)]
pub struct MintedNft {
    pub token_id: TokenId,
    pub receipt: TxReceipt,
}

pub struct NftService {
    wallet: Arc<WalletSessionProvider>,
    notifications: Arc<NotificationCenter>,
    contract_address: RwLock<Option<AztecAddress>>,
}

impl NftService {
    pub fn new(
        wallet: Arc<WalletSessionProvider>,
        notifications: Arc<NotificationCenter>,
        contract_address: Option<AztecAddress>,
    ) -> Self {
        Self {
            wallet,
            notifications,
            contract_address: RwLock::new(contract_address),
        }
    }

    /// Point the service at another collection, e.g. one just deployed.
    pub fn set_contract_address(&self, address: AztecAddress) {
        info!(%address, "[NFT] Contract address set");
        *self.contract_address.write() = Some(address);
    }

    pub fn contract_address(&self) -> Option<AztecAddress> {
        *self.contract_address.read()
    }

    /// Contract handle and the account acting on it.
    ///
    /// The contract needs both an address and a connected network client.
    fn prepare(&self) -> Result<(NftContract, AztecAddress)> {
        let contract = self
            .contract_address()
            .zip(self.wallet.network().client())
            .map(|(address, client)| NftContract::at(address, client))
            .ok_or_else(|| self.reject(AppError::Contract(CONTRACT_NOT_INITIALIZED.to_string())))?;

        let from = self
            .wallet
            .address()
            .ok_or_else(|| self.reject(AppError::Wallet(WALLET_NOT_INITIALIZED.to_string())))?;

        Ok((contract, from))
    }

    fn reject(&self, err: AppError) -> AppError {
        let message = match &err {
            AppError::Contract(msg) | AppError::Wallet(msg) | AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };
        self.notifications.error(message);
        err
    }

    fn check(&self, result: ValidationResult) -> Result<()> {
        result
            .into_result()
            .map_err(|msg| self.reject(AppError::Validation(msg)))
    }

    fn parse_token_id(&self, token_id: &str) -> Result<TokenId> {
        self.check(validate_token_id(token_id))?;
        token_id
            .parse()
            .map_err(|_| self.reject(AppError::Validation("Token ID must be a non-negative integer".to_string())))
    }

    fn parse_address(&self, address: &str) -> Result<AztecAddress> {
        self.check(validate_address(address))?;
        address.trim().parse().map_err(|e| self.reject(AppError::from(e)))
    }

    fn parse_price(&self, price: &str) -> Result<u128> {
        self.check(validate_price(price))?;
        price
            .trim()
            .parse()
            .map_err(|_| self.reject(AppError::Validation("Price must be a whole number".to_string())))
    }

    async fn track<F>(&self, messages: ProgressMessages, send: F) -> Result<TxReceipt>
    where
        F: Future<Output = std::result::Result<TxReceipt, PxeError>>,
    {
        self.notifications.track(messages, send).await.map_err(AppError::from)
    }

    /// Mint to `recipient`. The token id defaults to the current time in milliseconds.
    #[instrument(skip(self, metadata), fields(visibility = %visibility))]
    pub async fn mint(
        &self,
        metadata: NftMetadata,
        recipient: &str,
        visibility: Visibility,
        token_id: Option<TokenId>,
    ) -> Result<MintedNft> {
        let (contract, from) = self.prepare()?;
        let recipient = self.parse_address(recipient)?;
        let token_id = token_id.unwrap_or(TokenId(now_millis()));

        let messages = ProgressMessages {
            pending: format!("{} minting in progress...", visibility.label()),
            success: format!("NFT has been {} minted!", visibility.adverb()),
            error: "Failed to mint NFT".to_string(),
        };
        let receipt = self
            .track(messages, contract.mint(visibility, from, recipient, token_id, &metadata))
            .await?;

        Ok(MintedNft { token_id, receipt })
    }

    #[instrument(skip(self), fields(visibility = %visibility))]
    pub async fn transfer(&self, token_id: &str, recipient: &str, visibility: Visibility) -> Result<TxReceipt> {
        let (contract, from) = self.prepare()?;
        let token_id = self.parse_token_id(token_id)?;
        let recipient = self.parse_address(recipient)?;

        let messages = ProgressMessages {
            pending: format!("{} transfer in progress...", visibility.label()),
            success: format!("NFT has been {} transferred!", visibility.adverb()),
            error: "Failed to transfer NFT".to_string(),
        };
        self.track(messages, contract.transfer(visibility, from, token_id, recipient))
            .await
    }

    #[instrument(skip(self), fields(visibility = %visibility))]
    pub async fn list(&self, token_id: &str, price: &str, visibility: Visibility) -> Result<TxReceipt> {
        let (contract, from) = self.prepare()?;
        let token_id = self.parse_token_id(token_id)?;
        let price = self.parse_price(price)?;

        let messages = ProgressMessages {
            pending: format!("{} listing in progress...", visibility.label()),
            success: format!("NFT has been {} listed for sale!", visibility.adverb()),
            error: "Failed to list NFT".to_string(),
        };
        self.track(messages, contract.list(visibility, from, token_id, price))
            .await
    }

    #[instrument(skip(self), fields(visibility = %visibility))]
    pub async fn cancel_listing(&self, token_id: &str, visibility: Visibility) -> Result<TxReceipt> {
        let (contract, from) = self.prepare()?;
        let token_id = self.parse_token_id(token_id)?;

        let messages = ProgressMessages {
            pending: format!("{} cancellation in progress...", visibility.label()),
            success: format!("Listing has been {} cancelled!", visibility.adverb()),
            error: "Failed to cancel listing".to_string(),
        };
        self.track(messages, contract.cancel_listing(visibility, from, token_id))
            .await
    }

    #[instrument(skip(self), fields(visibility = %visibility))]
    pub async fn buy(&self, token_id: &str, price: &str, visibility: Visibility) -> Result<TxReceipt> {
        let (contract, from) = self.prepare()?;
        let token_id = self.parse_token_id(token_id)?;
        let price = self.parse_price(price)?;

        let messages = ProgressMessages {
            pending: format!("{} purchase in progress...", visibility.label()),
            success: format!("NFT has been {} purchased!", visibility.adverb()),
            error: "Failed to buy NFT".to_string(),
        };
        self.track(messages, contract.buy(visibility, from, token_id, price))
            .await
    }

    /// Whether `owner` holds `token_id`, as answered by a simulated contract call.
    #[instrument(skip(self))]
    pub async fn verify_ownership(&self, token_id: &str, owner: &str) -> Result<bool> {
        let (contract, from) = self.prepare()?;
        let parsed_id = self.parse_token_id(token_id)?;
        let owner_address = self.parse_address(owner)?;

        match contract.verify_ownership(from, parsed_id, owner_address).await {
            Ok(true) => {
                self.notifications
                    .info(format!("Address {} is the owner of token {}", owner.trim(), parsed_id));
                Ok(true)
            }
            Ok(false) => {
                self.notifications
                    .info(format!("Address {} is NOT the owner of token {}", owner.trim(), parsed_id));
                Ok(false)
            }
            Err(e) => {
                error!("[NFT] Verification error: {}", e);
                self.notifications.error("Failed to verify ownership");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn bridge_to_l1(&self, token_id: &str, l1_address: &str) -> Result<TxReceipt> {
        let (contract, from) = self.prepare()?;
        let token_id = self.parse_token_id(token_id)?;
        self.check(validate_l1_address(l1_address))?;
        let l1_address: EthAddress = l1_address.trim().parse().map_err(|e| self.reject(AppError::from(e)))?;

        let messages = ProgressMessages {
            pending: "Bridging NFT to L1...".to_string(),
            success: "NFT has been bridged to L1!".to_string(),
            error: "Failed to bridge NFT".to_string(),
        };
        self.track(messages, contract.bridge_to_l1(from, token_id, l1_address))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notifications::NotificationLevel;
    use crate::services::pxe::NetworkClientProvider;
    use crate::services::storage::MemorySessionStore;
    use lib_aztec::mock::MockNetworkService;
    use serde_json::json;

    struct Fixture {
        mock: Arc<MockNetworkService>,
        notifications: Arc<NotificationCenter>,
        wallet: Arc<WalletSessionProvider>,
        nft: NftService,
    }

    fn contract_address() -> AztecAddress {
        AztecAddress::from_low_u64(0xc0ffee)
    }

    fn recipient() -> String {
        AztecAddress::from_low_u64(0xb0b).to_string()
    }

    async fn fixture(connect_wallet: bool, contract: Option<AztecAddress>) -> Fixture {
        let mock = Arc::new(MockNetworkService::new());
        let notifications = Arc::new(NotificationCenter::new());
        let network = Arc::new(NetworkClientProvider::with_service(mock.clone(), notifications.clone()));
        network.mount().await;
        let wallet = Arc::new(WalletSessionProvider::new(
            network,
            Arc::new(MemorySessionStore::new()),
            notifications.clone(),
        ));
        if connect_wallet {
            wallet.connect().await.unwrap();
        }
        let nft = NftService::new(wallet.clone(), notifications.clone(), contract);
        notifications.drain();
        Fixture {
            mock,
            notifications,
            wallet,
            nft,
        }
    }

    #[tokio::test]
    async fn test_requires_contract() {
        let f = fixture(true, None).await;

        let err = f.nft.transfer("1", &recipient(), Visibility::Private).await.unwrap_err();

        assert!(matches!(err, AppError::Contract(ref msg) if msg == CONTRACT_NOT_INITIALIZED));
        assert!(f.notifications.contains(NotificationLevel::Error, CONTRACT_NOT_INITIALIZED));
        assert!(f.mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_requires_wallet() {
        let f = fixture(false, Some(contract_address())).await;

        let err = f.nft.list("1", "100", Visibility::Public).await.unwrap_err();

        assert!(matches!(err, AppError::Wallet(ref msg) if msg == WALLET_NOT_INITIALIZED));
        assert!(f.notifications.contains(NotificationLevel::Error, WALLET_NOT_INITIALIZED));
        assert!(f.mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_private_transfer_dispatch() {
        let f = fixture(true, Some(contract_address())).await;
        let from = f.wallet.address().unwrap();

        f.nft.transfer("7", &recipient(), Visibility::Private).await.unwrap();

        let calls = f.mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "privateTransfer");
        assert_eq!(calls[0].contract, contract_address());
        assert_eq!(calls[0].args, vec![json!("7"), json!(recipient()), json!(from)]);
        assert!(f.notifications.contains(NotificationLevel::Info, "Private transfer in progress..."));
        assert!(f.notifications.contains(NotificationLevel::Success, "NFT has been privately transferred!"));
    }

    #[tokio::test]
    async fn test_public_list_and_buy() {
        let f = fixture(true, Some(contract_address())).await;

        f.nft.list("7", "250", Visibility::Public).await.unwrap();
        f.nft.buy("7", "250", Visibility::Public).await.unwrap();
        f.nft.cancel_listing("7", Visibility::Private).await.unwrap();

        let methods: Vec<String> = f.mock.calls().into_iter().map(|c| c.method).collect();
        assert_eq!(methods, vec!["publicList", "publicBuy", "privateCancelListing"]);
        assert!(f.notifications.contains(NotificationLevel::Success, "NFT has been publicly listed for sale!"));
        assert!(f.notifications.contains(NotificationLevel::Success, "NFT has been publicly purchased!"));
        assert!(f.notifications.contains(NotificationLevel::Success, "Listing has been privately cancelled!"));
    }

    #[tokio::test]
    async fn test_mint_defaults() {
        let f = fixture(true, Some(contract_address())).await;

        let minted = f
            .nft
            .mint(NftMetadata::new("Owl #1", "First owl", None), &recipient(), Visibility::Public, None)
            .await
            .unwrap();

        assert!(minted.token_id.0 > 0);
        let calls = f.mock.calls();
        assert_eq!(calls[0].method, "mint");
        assert_eq!(calls[0].args[1], json!(minted.token_id.to_string()));
        assert!(f.notifications.contains(NotificationLevel::Success, "NFT has been publicly minted!"));
    }

    #[tokio::test]
    async fn test_invalid_inputs_are_rejected() {
        let f = fixture(true, Some(contract_address())).await;

        assert!(matches!(
            f.nft.list("7", "0", Visibility::Public).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            f.nft.transfer("seven", &recipient(), Visibility::Public).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            f.nft.transfer("7", "0x1234", Visibility::Public).await,
            Err(AppError::Validation(_))
        ));
        assert!(f.mock.calls().is_empty());
        assert!(f.notifications.contains(NotificationLevel::Error, "Price must be greater than 0"));
    }

    #[tokio::test]
    async fn test_reverted_transaction() {
        let f = fixture(true, Some(contract_address())).await;
        f.mock.set_fail_sends(true);

        let err = f.nft.buy("7", "250", Visibility::Private).await.unwrap_err();

        assert!(matches!(err, AppError::Contract(_)));
        assert!(f.notifications.contains(NotificationLevel::Info, "Private purchase in progress..."));
        assert!(f.notifications.contains(NotificationLevel::Error, "Failed to buy NFT"));
        assert_eq!(f.notifications.count(NotificationLevel::Success), 0);
    }

    #[tokio::test]
    async fn test_verify_ownership_reports_result() {
        let f = fixture(true, Some(contract_address())).await;
        let owner = recipient();

        assert!(f.nft.verify_ownership("7", &owner).await.unwrap());
        assert!(f
            .notifications
            .contains(NotificationLevel::Info, &format!("Address {} is the owner of token 7", owner)));

        f.mock.set_simulate_result(json!(false));
        assert!(!f.nft.verify_ownership("7", &owner).await.unwrap());
        assert!(f
            .notifications
            .contains(NotificationLevel::Info, &format!("Address {} is NOT the owner of token 7", owner)));
    }

    #[tokio::test]
    async fn test_bridge_to_l1() {
        let f = fixture(true, Some(contract_address())).await;
        let l1 = "0x00000000000000000000000000000000000000ff";

        f.nft.bridge_to_l1("7", l1).await.unwrap();

        let calls = f.mock.calls();
        assert_eq!(calls[0].method, "bridgeToL1");
        assert_eq!(calls[0].args[1], json!(l1));
        assert!(f.notifications.contains(NotificationLevel::Success, "NFT has been bridged to L1!"));

        assert!(f.nft.bridge_to_l1("7", "0x12").await.is_err());
        assert!(f.notifications.contains(NotificationLevel::Error, "Invalid L1 address format"));
    }

    #[tokio::test]
    async fn test_set_contract_address() {
        let f = fixture(true, None).await;
        assert!(f.nft.contract_address().is_none());

        f.nft.set_contract_address(contract_address());
        f.nft.cancel_listing("7", Visibility::Public).await.unwrap();

        assert_eq!(f.mock.calls()[0].method, "publicCancelListing");
    }
}
