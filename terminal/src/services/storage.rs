//! # Session Storage
//!
//! Persists the user's intent to stay connected (`walletConnected`) across
//! restarts. The flag is advisory: it only triggers a reconnection attempt on
//! startup and proves nothing about the session.
//!
//! ## Backends
//!
//! - [`FileSessionStore`]: small JSON document on disk
//!   (`{"wallet_connected": true}`), by default under the per-user data directory
//! - [`MemorySessionStore`]: in-process, for tests

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Directory under the data dir holding the session file.
pub const APP_DIR_NAME: &str = "aztec-nft-terminal";

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value persistence for the connected flag.
pub trait SessionStore: Send + Sync {
    /// Whether a prior session asked to stay connected. Missing means `false`.
    fn load_connected(&self) -> bool;

    fn store_connected(&self) -> Result<(), StorageError>;

    /// Remove the flag. Removing an absent flag is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(default)]
    wallet_connected: bool,
}

/// Session flag kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_local_dir>/aztec-nft-terminal/session.json`, or `./session.json`
    /// when the platform has no data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load_connected(&self) -> bool {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return false,
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to read session file: {}", e);
                return false;
            }
        };

        match serde_json::from_str::<SessionDocument>(&contents) {
            Ok(doc) => doc.wallet_connected,
            Err(e) => {
                warn!(path = %self.path.display(), "Ignoring corrupt session file: {}", e);
                false
            }
        }
    }

    fn store_connected(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let doc = SessionDocument { wallet_connected: true };
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, json).map_err(|e| self.io_err(e))?;

        debug!(path = %self.path.display(), "Session flag stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session flag cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}

/// In-memory session flag.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    connected: Mutex<bool>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts with the flag already set, as after a previous session.
    pub fn connected() -> Self {
        Self {
            connected: Mutex::new(true),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load_connected(&self) -> bool {
        *self.connected.lock()
    }

    fn store_connected(&self) -> Result<(), StorageError> {
        *self.connected.lock() = true;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.connected.lock() = false;
        Ok(())
    }
}
