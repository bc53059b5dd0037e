//! # Client Configuration
//!
//! Endpoints and settings for the marketplace client, read from the
//! environment (and `.env`). Command-line flags override individual fields.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PXE_URL` | `http://localhost:8080` |
//! | `NFT_API_URL` | `http://127.0.0.1:3001` |
//! | `NFT_CONTRACT_ADDRESS` | unset |
//! | `NFT_SESSION_FILE` | `<data dir>/aztec-nft-terminal/session.json` |
//! | `PXE_TIMEOUT_SECS` | `30` |

use crate::core::error::AppError;
use crate::services::api::DEFAULT_API_URL;
use crate::services::storage::FileSessionStore;
use lib_aztec::AztecAddress;
use lib_utils::envs::{get_env_opt, get_env_or, get_env_parse, Error as EnvError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PXE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PXE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub pxe_url: String,
    pub api_url: String,
    pub contract_address: Option<AztecAddress>,
    pub session_file: PathBuf,
    pub pxe_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pxe_url: DEFAULT_PXE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            contract_address: None,
            session_file: FileSessionStore::default_path(),
            pxe_timeout: Duration::from_secs(DEFAULT_PXE_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self {
            pxe_url: get_env_or("PXE_URL", DEFAULT_PXE_URL),
            api_url: get_env_or("NFT_API_URL", DEFAULT_API_URL),
            ..Self::default()
        };

        if let Some(address) = get_env_opt("NFT_CONTRACT_ADDRESS") {
            config.contract_address = Some(parse_contract_address(&address)?);
        }
        if let Some(path) = get_env_opt("NFT_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }
        match get_env_parse::<u64>("PXE_TIMEOUT_SECS") {
            Ok(secs) => config.pxe_timeout = timeout_from_secs(secs)?,
            Err(EnvError::MissingEnv(_)) => {}
            Err(EnvError::WrongFormat(_)) => return Err(timeout_error()),
        }

        Ok(config)
    }
}

pub fn parse_contract_address(value: &str) -> Result<AztecAddress, AppError> {
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Validation(format!("NFT_CONTRACT_ADDRESS is invalid: {e}")))
}

pub fn parse_timeout(value: &str) -> Result<Duration, AppError> {
    let secs = value.trim().parse::<u64>().map_err(|_| timeout_error())?;
    timeout_from_secs(secs)
}

fn timeout_from_secs(secs: u64) -> Result<Duration, AppError> {
    if (1..=600).contains(&secs) {
        Ok(Duration::from_secs(secs))
    } else {
        Err(timeout_error())
    }
}

fn timeout_error() -> AppError {
    AppError::Validation("PXE_TIMEOUT_SECS must be between 1 and 600".to_string())
}
