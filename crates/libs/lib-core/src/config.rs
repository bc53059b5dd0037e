//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let pxe_url = &config.pxe_url;
//! ```
//!
//! The config must be initialized once at application startup using [`init_config()`].

use lib_utils::envs::{get_env_opt, get_env_or, get_env_parse, Error as EnvError};
use lib_utils::validation::validate_hex_field;
use std::sync::OnceLock;

/// Default address of the local network-execution service (sandbox PXE).
pub const DEFAULT_PXE_URL: &str = "http://localhost:8080";

/// Default timeout for a single call to the network-execution service.
pub const DEFAULT_PXE_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Network-execution service (PXE) JSON-RPC endpoint
    pub pxe_url: String,

    /// Deployed NFT collection the mint endpoint operates on.
    ///
    /// Optional at startup: only `/api/mint-nft` needs it, and it reports
    /// a 500 when absent.
    pub nft_contract_address: Option<String>,

    /// Upper bound for a single PXE request, in seconds.
    ///
    /// Valid range: 1-600 seconds. Proving a private call on a laptop is slow.
    pub pxe_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let pxe_url = get_env_or("PXE_URL", DEFAULT_PXE_URL);

        let nft_contract_address = get_env_opt("NFT_CONTRACT_ADDRESS");

        let pxe_timeout_secs = match get_env_parse::<u64>("PXE_TIMEOUT_SECS") {
            Ok(secs) => secs,
            Err(EnvError::MissingEnv(_)) => DEFAULT_PXE_TIMEOUT_SECS,
            Err(EnvError::WrongFormat(_)) => {
                return Err("PXE_TIMEOUT_SECS must be a valid number".to_string())
            }
        };

        Ok(Self {
            pxe_url,
            nft_contract_address,
            pxe_timeout_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.pxe_url.starts_with("http://") || self.pxe_url.starts_with("https://")) {
            return Err("PXE_URL must be an http(s) URL".to_string());
        }

        if self.pxe_timeout_secs < 1 || self.pxe_timeout_secs > 600 {
            return Err("PXE_TIMEOUT_SECS must be between 1 and 600".to_string());
        }

        if let Some(address) = &self.nft_contract_address {
            validate_hex_field(address, 64, "NFT_CONTRACT_ADDRESS")?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pxe_url: DEFAULT_PXE_URL.to_string(),
            nft_contract_address: None,
            pxe_timeout_secs: DEFAULT_PXE_TIMEOUT_SECS,
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// This should be called once at application startup, before any handlers
/// or services that need configuration are used.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<(), String> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG.set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet. This ensures
/// configuration is always available when accessed.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}
