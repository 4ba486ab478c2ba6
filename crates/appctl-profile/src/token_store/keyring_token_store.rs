use crate::{AccessToken, ProfileError, ProfileResult, TokenStore};

use async_trait::async_trait;
use keyring::{Entry, Error as KeyringError};
use log::debug;

pub const DEFAULT_KEYRING_SERVICE: &str = "appctl";

/// Token store backed by the OS credential service.
///
/// The entry password holds the JSON-encoded [`AccessToken`]. Keyring calls
/// block, so each one runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    async fn with_entry<T, F>(&self, key: &str, op: F) -> ProfileResult<T>
    where
        T: Send + 'static,
        F: FnOnce(Entry) -> Result<T, KeyringError> + Send + 'static,
    {
        let service = self.service.clone();
        let user = key.to_string();

        let joined = tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, &user)?;
            op(entry)
        })
        .await
        .map_err(|e| ProfileError::token_store(key, format!("keyring task failed: {e}")))?;

        joined.map_err(|e| ProfileError::token_store(key, e.to_string()))
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEYRING_SERVICE)
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn get(&self, key: &str) -> ProfileResult<Option<AccessToken>> {
        let secret = self
            .with_entry(key, |entry| match entry.get_password() {
                Ok(secret) => Ok(Some(secret)),
                Err(KeyringError::NoEntry) => Ok(None),
                Err(e) => Err(e),
            })
            .await?;

        match secret {
            Some(secret) => serde_json::from_str(&secret)
                .map(Some)
                .map_err(|e| ProfileError::token_store(key, format!("unreadable entry: {e}"))),
            None => {
                debug!("No keyring entry for '{key}' in service '{}'", self.service);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, token: AccessToken) -> ProfileResult<()> {
        let secret = serde_json::to_string(&token)?;
        self.with_entry(key, move |entry| entry.set_password(&secret))
            .await
    }

    async fn remove(&self, key: &str) -> ProfileResult<()> {
        self.with_entry(key, |entry| match entry.delete_password() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(e) => Err(e),
        })
        .await
    }
}
