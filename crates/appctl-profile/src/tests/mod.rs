//! Unit tests for the profile crate.
//!
//! These tests can access crate internals via `use crate::`.

mod profile;
mod token_store;

use crate::{
    AccessToken, EnvironmentResolver, MemoryTokenStore, ProfileError, ProfileLocation,
    ProfileResult, ServerUser, TokenStore,
};

use async_trait::async_trait;
use tempfile::TempDir;

pub(crate) const TEST_ENVIRONMENT: &str = "prod";
pub(crate) const TEST_ENDPOINT: &str = "https://api.example.test";

pub(crate) fn server_user() -> ServerUser {
    ServerUser {
        id: "u-123".into(),
        name: "alice".into(),
        display_name: "Alice Example".into(),
        email: "alice@example.com".into(),
    }
}

pub(crate) fn access_token() -> AccessToken {
    AccessToken::new(Some("tok-1".into()), "secret-value")
}

/// Temp dir plus a profile location nested inside it (not yet created).
pub(crate) fn temp_location() -> (TempDir, ProfileLocation) {
    let temp = TempDir::new().unwrap();
    let location = ProfileLocation::in_dir(temp.path().join("profile"));
    (temp, location)
}

/// Resolver knowing only [`TEST_ENVIRONMENT`].
pub(crate) struct SingleEnvironment;

impl EnvironmentResolver for SingleEnvironment {
    fn endpoint(&self, name: &str) -> Option<String> {
        (name == TEST_ENVIRONMENT).then(|| TEST_ENDPOINT.to_string())
    }
}

/// Token store whose reads always fail while writes go to `inner`.
#[derive(Default)]
pub(crate) struct UnreadableTokenStore {
    pub(crate) inner: MemoryTokenStore,
}

#[async_trait]
impl TokenStore for UnreadableTokenStore {
    async fn get(&self, key: &str) -> ProfileResult<Option<AccessToken>> {
        Err(ProfileError::token_store(key, "unreadable entry"))
    }

    async fn set(&self, key: &str, token: AccessToken) -> ProfileResult<()> {
        self.inner.set(key, token).await
    }

    async fn remove(&self, key: &str) -> ProfileResult<()> {
        self.inner.remove(key).await
    }
}
