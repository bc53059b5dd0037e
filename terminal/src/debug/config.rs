//! Logging configuration from environment variables

use lib_utils::envs::{get_env_opt, get_env_or};
use std::path::PathBuf;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILTER: &str = "terminal=info,warn";
pub const LOG_FILE_NAME: &str = "terminal.log";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "terminal=debug,info")
    pub log_level: String,
    /// Also write warnings and errors to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `NFT_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter (default `terminal=info,warn`)
    /// - `NFT_LOG_STDERR`: `1` to mirror warnings to stderr
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("NFT_LOG_DIR", DEFAULT_LOG_DIR)),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_FILTER),
            log_to_stderr: get_env_opt("NFT_LOG_STDERR").is_some_and(|v| v == "1"),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
