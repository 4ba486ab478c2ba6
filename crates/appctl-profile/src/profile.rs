use crate::{
    AccessToken, DefaultApp, EnvironmentResolver, ProfileError, ProfileLocation, ProfileResult,
    ServerUser, StoredProfile, TokenStore, UserSource, token_store::{restore_token, snapshot_token},
};

use std::fs;
use std::io::{ErrorKind, Write};

use log::{debug, info};
use serde::Serialize;

/// The locally logged-in user.
///
/// Serializes to the profile file shape. The access token is never part of
/// it; use [`Profile::access_token`] with the token store instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    /// Key into the token store.
    pub user_name: String,
    pub display_name: String,
    pub email: String,
    pub environment: String,
    pub default_app: Option<DefaultApp>,
}

impl Profile {
    /// Normalizes either input shape into a profile.
    ///
    /// Server records carry no environment, so `environment` is used. A stored
    /// record keeps its own environment unless it is empty.
    pub fn from_source(source: impl Into<UserSource>, environment: &str) -> Self {
        match source.into() {
            UserSource::Server(ServerUser {
                id,
                name,
                display_name,
                email,
            }) => Self {
                user_id: id,
                user_name: name,
                display_name,
                email,
                environment: environment.to_string(),
                default_app: None,
            },
            UserSource::Stored(StoredProfile {
                user_id,
                user_name,
                display_name,
                email,
                environment: stored_environment,
                default_app,
            }) => Self {
                user_id,
                user_name,
                display_name,
                email,
                environment: if stored_environment.is_empty() {
                    environment.to_string()
                } else {
                    stored_environment
                },
                default_app,
            },
        }
    }

    /// Writes the profile file, creating its directory if needed.
    ///
    /// Written to a temp file and renamed into place, so a crash mid-write
    /// leaves the previous file intact.
    pub fn save(&self, location: &ProfileLocation) -> ProfileResult<&Self> {
        let dir = location.dir();
        fs::create_dir_all(dir).map_err(|e| ProfileError::dir_creation(dir.to_path_buf(), e))?;

        let final_path = location.path();
        let temp_path = dir.join(format!(
            "{}.tmp.{}",
            location.file_name(),
            std::process::id()
        ));

        let json = serde_json::to_string_pretty(self)?;

        let written =
            fs::File::create(&temp_path).and_then(|mut file| file.write_all(json.as_bytes()));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(ProfileError::file_write(temp_path, e));
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ProfileError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved profile for {} to {final_path:?}", self.user_name);
        Ok(self)
    }

    /// Stores `token` for this user. The profile file is untouched.
    pub async fn set_access_token(
        &self,
        tokens: &dyn TokenStore,
        token: AccessToken,
    ) -> ProfileResult<&Self> {
        tokens.set(&self.user_name, token).await?;
        debug!("Stored access token for {}", self.user_name);
        Ok(self)
    }

    pub async fn access_token(&self, tokens: &dyn TokenStore) -> ProfileResult<Option<AccessToken>> {
        tokens.get(&self.user_name).await
    }

    pub async fn access_token_id(&self, tokens: &dyn TokenStore) -> ProfileResult<Option<String>> {
        Ok(self.access_token(tokens).await?.and_then(|token| token.id))
    }

    /// API endpoint of this profile's environment.
    #[track_caller]
    pub fn endpoint(&self, resolver: &dyn EnvironmentResolver) -> ProfileResult<String> {
        resolver
            .endpoint(&self.environment)
            .ok_or_else(|| ProfileError::unknown_environment(&self.environment))
    }

    /// Removes the token entry, then the profile file.
    ///
    /// A missing profile file counts as already deleted. If deletion fails for
    /// any other reason the previous token entry is put back.
    pub async fn logout(
        &self,
        tokens: &dyn TokenStore,
        location: &ProfileLocation,
    ) -> ProfileResult<()> {
        let previous = snapshot_token(tokens, &self.user_name).await;
        tokens.remove(&self.user_name).await?;

        let path = location.path();
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Profile file {path:?} already absent");
            }
            Err(e) => {
                restore_token(tokens, &self.user_name, previous).await;
                return Err(ProfileError::file_delete(path, e));
            }
        }

        info!("Logged out {}", self.user_name);
        Ok(())
    }
}
