//! # NFT Service
//!
//! Business logic behind the collection deploy and mint endpoints.
//!
//! Both operations act on behalf of the first pre-provisioned sandbox account,
//! which is the collection admin for anything deployed through this API.
//!
//! ```text
//! NftService → NetworkService (PXE) → NFT collection contract
//! ```

use lib_aztec::{
    AztecAddress, NetworkService, NftContract, NftMetadata, TokenId, Visibility,
};
use lib_core::AppError;
use lib_utils::now_millis;
use shared::dto::{DeployNftRequest, DeployNftResponse, MintNftRequest, MintNftResponse};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct NftService {
    pxe: Arc<dyn NetworkService>,
}

impl NftService {
    pub fn new(pxe: Arc<dyn NetworkService>) -> Self {
        Self { pxe }
    }

    /// First pre-provisioned account, after confirming the service is up.
    async fn operator(&self) -> Result<AztecAddress, AppError> {
        let node = self.pxe.node_info().await?;
        info!(chain_id = node.l1_chain_id, "[NFT] Connected to PXE");

        self.pxe
            .initial_test_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Pxe("No test accounts available".to_string()))
    }

    /// Deploy a new collection.
    #[instrument(skip(self, req), fields(name = %req.name, symbol = %req.symbol))]
    pub async fn deploy(&self, req: DeployNftRequest) -> Result<DeployNftResponse, AppError> {
        if req.name.trim().is_empty() || req.symbol.trim().is_empty() {
            return Err(AppError::InvalidInput("Name and symbol are required".to_string()));
        }

        let deployer = self.operator().await?;
        let contract = NftContract::deploy(self.pxe.clone(), deployer, &req.name, &req.symbol).await?;

        Ok(DeployNftResponse {
            address: contract.address().to_string(),
            name: req.name,
            symbol: req.symbol,
        })
    }

    /// Mint into `recipientAddress` on the collection at `contract_address`.
    ///
    /// The token id is the current time in milliseconds.
    #[instrument(skip(self, req, contract_address), fields(recipient = %req.recipient_address, private = req.is_private))]
    pub async fn mint(
        &self,
        req: MintNftRequest,
        contract_address: Option<&str>,
    ) -> Result<MintNftResponse, AppError> {
        if req.name.trim().is_empty()
            || req.description.trim().is_empty()
            || req.recipient_address.trim().is_empty()
        {
            return Err(AppError::InvalidInput(
                "Name, description, and recipient address are required".to_string(),
            ));
        }

        let recipient: AztecAddress = req.recipient_address.trim().parse()?;

        let contract_address = contract_address
            .ok_or_else(|| AppError::Config("NFT contract address not configured".to_string()))?;
        let contract_address: AztecAddress = contract_address
            .parse()
            .map_err(|e| AppError::Config(format!("NFT_CONTRACT_ADDRESS is invalid: {e}")))?;

        let operator = self.operator().await?;
        let contract = NftContract::at(contract_address, self.pxe.clone());

        let token_id = TokenId(now_millis());
        let visibility = Visibility::from_private_flag(req.is_private);
        let metadata = NftMetadata::new(req.name, req.description, req.image);

        let receipt = contract
            .mint(visibility, operator, recipient, token_id, &metadata)
            .await?;
        info!(%token_id, tx_hash = %receipt.tx_hash, "[NFT] Minted {}", visibility.adverb());

        Ok(MintNftResponse {
            success: true,
            token_id: token_id.to_string(),
            recipient: req.recipient_address,
            is_private: req.is_private,
        })
    }
}
