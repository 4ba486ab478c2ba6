pub(crate) mod file_token_store;
pub(crate) mod keyring_token_store;
pub(crate) mod memory_token_store;

use crate::{AccessToken, ProfileResult};

use async_trait::async_trait;
use log::warn;

/// Secure storage for access tokens, keyed by user name.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns `Ok(None)` when no entry exists for `key`.
    async fn get(&self, key: &str) -> ProfileResult<Option<AccessToken>>;

    /// Stores `token` under `key`, replacing any existing entry.
    async fn set(&self, key: &str, token: AccessToken) -> ProfileResult<()>;

    /// Removes the entry for `key`. Removing a missing entry succeeds.
    async fn remove(&self, key: &str) -> ProfileResult<()>;
}

/// Reads the current entry so it can be put back if a later step fails.
///
/// `None` means the entry could not be read; the caller carries on and a
/// rollback leaves the entry alone.
pub(crate) async fn snapshot_token(
    tokens: &dyn TokenStore,
    key: &str,
) -> Option<Option<AccessToken>> {
    match tokens.get(key).await {
        Ok(previous) => Some(previous),
        Err(e) => {
            warn!("Could not read existing token entry for '{key}', rollback disabled: {e}");
            None
        }
    }
}

/// Puts a token entry back to its snapshot after a failed profile file update.
///
/// Failures are logged, never returned: the caller is already reporting the
/// error that triggered the rollback.
pub(crate) async fn restore_token(
    tokens: &dyn TokenStore,
    key: &str,
    snapshot: Option<Option<AccessToken>>,
) {
    let result = match snapshot {
        Some(Some(token)) => tokens.set(key, token).await,
        Some(None) => tokens.remove(key).await,
        None => {
            warn!("Token entry for '{key}' was unreadable before the update, not rolled back");
            return;
        }
    };

    if let Err(e) = result {
        warn!("Failed to roll back token entry for '{key}': {e}");
    }
}
