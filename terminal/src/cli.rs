//! # Command Line Interface
//!
//! Every command bootstraps the [`App`] (network mount, then wallet mount),
//! runs one operation and prints the notifications it raised.

use crate::app::notifications::{Notification, NotificationLevel};
use crate::app::App;
use crate::config::{parse_contract_address, parse_timeout, ClientConfig};
use crate::core::error::{AppError, Result};
use clap::{Args, Parser, Subcommand};
use lib_aztec::{NftMetadata, TokenId, TxReceipt, Visibility};
use shared::{truncate_address, MintNftRequest};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "terminal", version, about = "Private NFT marketplace client for the Aztec sandbox")]
pub struct Cli {
    /// PXE JSON-RPC endpoint
    #[arg(long, env = "PXE_URL")]
    pub pxe_url: Option<String>,

    /// Deploy/mint API server
    #[arg(long, env = "NFT_API_URL")]
    pub api_url: Option<String>,

    /// Deployed NFT collection
    #[arg(long, env = "NFT_CONTRACT_ADDRESS")]
    pub contract: Option<String>,

    /// File holding the persisted session flag
    #[arg(long, env = "NFT_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Upper bound for a single PXE call, in seconds
    #[arg(long, env = "PXE_TIMEOUT_SECS")]
    pub pxe_timeout_secs: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct VisibilityArg {
    /// Use the private variant of the action
    #[arg(long)]
    pub private: bool,
}

impl From<VisibilityArg> for Visibility {
    fn from(arg: VisibilityArg) -> Self {
        Visibility::from_private_flag(arg.private)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show connection, wallet and contract status
    Status,
    /// Connect the wallet (first sandbox test account)
    Connect,
    /// Disconnect the wallet and forget the session
    Disconnect,
    /// Refresh and list the accounts registered in the PXE
    Accounts,
    /// Check that the API server is up
    Health,
    /// Deploy a new NFT collection through the API server
    Deploy { name: String, symbol: String },
    /// Mint an NFT
    Mint {
        name: String,
        description: String,
        /// Recipient address (defaults to the connected account)
        #[arg(long)]
        recipient: Option<String>,
        #[arg(long)]
        image: Option<String>,
        /// Token id (defaults to the current time in milliseconds); direct mints only
        #[arg(long)]
        token_id: Option<u128>,
        /// Send the mint from the wallet instead of through the API server
        #[arg(long)]
        direct: bool,
        #[command(flatten)]
        visibility: VisibilityArg,
    },
    /// Transfer an NFT
    Transfer {
        token_id: String,
        recipient: String,
        #[command(flatten)]
        visibility: VisibilityArg,
    },
    /// List an NFT for sale
    List {
        token_id: String,
        price: String,
        #[command(flatten)]
        visibility: VisibilityArg,
    },
    /// Cancel a listing
    Cancel {
        token_id: String,
        #[command(flatten)]
        visibility: VisibilityArg,
    },
    /// Buy a listed NFT
    Buy {
        token_id: String,
        price: String,
        #[command(flatten)]
        visibility: VisibilityArg,
    },
    /// Check whether an address owns a token
    Verify { token_id: String, owner: String },
    /// Bridge an NFT to an L1 address
    Bridge { token_id: String, l1_address: String },
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: ClientConfig) -> Result<ClientConfig> {
        if let Some(url) = &self.pxe_url {
            config.pxe_url = url.clone();
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(address) = &self.contract {
            config.contract_address = Some(parse_contract_address(address)?);
        }
        if let Some(path) = &self.session_file {
            config.session_file = path.clone();
        }
        if let Some(secs) = &self.pxe_timeout_secs {
            config.pxe_timeout = parse_timeout(secs)?;
        }
        Ok(config)
    }
}

/// Bootstrap `app` and run `command`.
pub async fn run(app: &App, command: Command) -> Result<()> {
    app.bootstrap().await;

    match command {
        Command::Status => print_status(app),
        Command::Connect => {
            let address = app.wallet.connect().await?;
            println!("Connected as {}", address);
        }
        Command::Disconnect => app.wallet.disconnect(),
        Command::Accounts => {
            app.pxe.refresh_accounts().await;
            let accounts = app.pxe.accounts();
            if accounts.is_empty() {
                println!("No registered accounts");
            }
            for account in accounts {
                println!("{}", account);
            }
        }
        Command::Health => {
            app.api.health().await.map_err(AppError::Api)?;
            println!("API server OK ({})", app.config.api_url);
        }
        Command::Deploy { name, symbol } => {
            let deployed = app.deploy_collection(&name, &symbol).await?;
            println!("Deployed {} ({}) at {}", deployed.name, deployed.symbol, deployed.address);
        }
        Command::Mint {
            name,
            description,
            recipient,
            image,
            token_id,
            direct,
            visibility,
        } => {
            let recipient = match recipient {
                Some(recipient) => recipient,
                None => app.wallet.require_address()?.to_string(),
            };

            if direct {
                let metadata = NftMetadata::new(name, description, image);
                let minted = app
                    .nft
                    .mint(metadata, &recipient, visibility.into(), token_id.map(TokenId))
                    .await?;
                println!("Minted token {}", minted.token_id);
                print_receipt(&minted.receipt);
            } else {
                let minted = app
                    .mint_via_api(MintNftRequest {
                        name,
                        description,
                        image,
                        recipient_address: recipient,
                        is_private: visibility.private,
                    })
                    .await?;
                println!("Minted token {} to {}", minted.token_id, minted.recipient);
            }
        }
        Command::Transfer {
            token_id,
            recipient,
            visibility,
        } => print_receipt(&app.nft.transfer(&token_id, &recipient, visibility.into()).await?),
        Command::List {
            token_id,
            price,
            visibility,
        } => print_receipt(&app.nft.list(&token_id, &price, visibility.into()).await?),
        Command::Cancel { token_id, visibility } => {
            print_receipt(&app.nft.cancel_listing(&token_id, visibility.into()).await?)
        }
        Command::Buy {
            token_id,
            price,
            visibility,
        } => print_receipt(&app.nft.buy(&token_id, &price, visibility.into()).await?),
        Command::Verify { token_id, owner } => {
            let is_owner = app.nft.verify_ownership(&token_id, &owner).await?;
            println!("{}", if is_owner { "owner" } else { "not owner" });
        }
        Command::Bridge { token_id, l1_address } => {
            print_receipt(&app.nft.bridge_to_l1(&token_id, &l1_address).await?)
        }
    }

    Ok(())
}

fn print_status(app: &App) {
    println!("PXE:      {} ({:?})", app.pxe.url(), app.pxe.state());
    if let Some(chain_id) = app.pxe.chain_id() {
        println!("Chain:    {}", chain_id);
    }
    println!("Accounts: {}", app.pxe.accounts().len());
    if let Some(err) = app.pxe.error() {
        println!("Error:    {}", err);
    }

    match app.wallet.address() {
        Some(address) => println!(
            "Wallet:   {} (balance {})",
            truncate_address(&address.to_string()),
            app.wallet.balance().unwrap_or_default()
        ),
        None => println!("Wallet:   {:?}", app.wallet.status()),
    }

    match app.nft.contract_address() {
        Some(address) => println!("Contract: {}", address),
        None => println!("Contract: not configured"),
    }
}

fn print_receipt(receipt: &TxReceipt) {
    match receipt.block_number {
        Some(block) => println!("Transaction {} {} in block {}", receipt.tx_hash, receipt.status.as_str(), block),
        None => println!("Transaction {} {}", receipt.tx_hash, receipt.status.as_str()),
    }
}

/// Print notifications, errors to stderr.
pub fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        let line = format!("[{}] {}", n.level, n.message);
        match n.level {
            NotificationLevel::Error | NotificationLevel::Warning => eprintln!("{}", line),
            NotificationLevel::Success | NotificationLevel::Info => println!("{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_aztec::AztecAddress;

    #[test]
    fn test_parse_visibility_flag() {
        let cli = Cli::try_parse_from(["terminal", "transfer", "7", "0x01", "--private"]).unwrap();
        match cli.command {
            Command::Transfer { token_id, visibility, .. } => {
                assert_eq!(token_id, "7");
                assert_eq!(Visibility::from(visibility), Visibility::Private);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["terminal", "buy", "7", "100"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Buy { visibility: VisibilityArg { private: false }, .. }
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let contract = AztecAddress::from_low_u64(0xc0ffee).to_string();
        let cli = Cli::try_parse_from([
            "terminal",
            "--pxe-url",
            "http://sandbox:8080",
            "--contract",
            contract.as_str(),
            "--pxe-timeout-secs",
            "5",
            "status",
        ])
        .unwrap();

        let config = cli.apply(ClientConfig::default()).unwrap();

        assert_eq!(config.pxe_url, "http://sandbox:8080");
        assert_eq!(config.contract_address, Some(AztecAddress::from_low_u64(0xc0ffee)));
        assert_eq!(config.pxe_timeout, std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_contract_flag() {
        let cli = Cli::try_parse_from(["terminal", "--contract", "0x12", "status"]).unwrap();
        assert!(matches!(cli.apply(ClientConfig::default()), Err(AppError::Validation(_))));
    }
}
