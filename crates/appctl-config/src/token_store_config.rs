use crate::{ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use appctl_profile::{DEFAULT_KEYRING_SERVICE, DEFAULT_TOKEN_FILENAME};
use serde::Deserialize;

/// Where access tokens are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreBackend {
    /// OS credential service
    Keyring,
    /// Owner-only JSON file in the config directory
    File,
    /// Process memory, nothing persisted
    Memory,
}

impl FromStr for TokenStoreBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyring" => Ok(Self::Keyring),
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::token_store(format!(
                "unknown token store backend '{other}', expected keyring, file or memory"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TokenStoreConfig {
    pub backend: TokenStoreBackend,
    /// Keyring service name
    pub service: String,
    /// Token file name for the `file` backend, relative to the config directory
    pub file: String,
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self {
            backend: TokenStoreBackend::Keyring,
            service: String::from(DEFAULT_KEYRING_SERVICE),
            file: String::from(DEFAULT_TOKEN_FILENAME),
        }
    }
}

impl TokenStoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend == TokenStoreBackend::Keyring && self.service.trim().is_empty() {
            return Err(ConfigError::token_store(
                "token_store.service must not be empty for the keyring backend",
            ));
        }

        if self.backend == TokenStoreBackend::File && self.file.trim().is_empty() {
            return Err(ConfigError::token_store(
                "token_store.file must not be empty for the file backend",
            ));
        }

        Ok(())
    }

    pub fn file_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.file)
    }
}
