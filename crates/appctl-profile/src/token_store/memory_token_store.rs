use crate::{AccessToken, ProfileResult, TokenStore};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-local token store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> ProfileResult<Option<AccessToken>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, token: AccessToken) -> ProfileResult<()> {
        self.entries.lock().await.insert(key.to_string(), token);
        Ok(())
    }

    async fn remove(&self, key: &str) -> ProfileResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
