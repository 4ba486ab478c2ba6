//! Plain-file token store for hosts without a credential service.
//!
//! Entries live in one JSON object keyed by user name. On Unix the file is
//! created with mode `0600`.

use crate::{AccessToken, ProfileError, ProfileResult, TokenStore};

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub const DEFAULT_TOKEN_FILENAME: &str = "tokens.json";

type Entries = BTreeMap<String, AccessToken>;

#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self, key: &str) -> ProfileResult<Entries> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                ProfileError::token_store(
                    key,
                    format!("token file {} is corrupted: {e}", self.path.display()),
                )
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(ProfileError::file_read(self.path.clone(), e)),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> ProfileResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| ProfileError::dir_creation(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut options = tokio::fs::OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            options.mode(0o600);

            let mut file = options
                .open(&temp_path)
                .await
                .map_err(|e| ProfileError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| ProfileError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| ProfileError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(ProfileError::atomic_rename(temp_path, self.path.clone(), e));
        }

        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> ProfileResult<Option<AccessToken>> {
        let mut entries = self.read_entries(key).await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, token: AccessToken) -> ProfileResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries(key).await?;
        entries.insert(key.to_string(), token);
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> ProfileResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries(key).await?;

        if entries.remove(key).is_none() {
            debug!("No token entry for '{key}' in {}", self.path.display());
            return Ok(());
        }

        self.write_entries(&entries).await
    }
}
