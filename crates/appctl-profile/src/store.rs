use crate::{
    AccessToken, DefaultApp, Profile, ProfileError, ProfileLocation, ProfileResult, StoredProfile,
    TokenStore, UserSource, token_store::{restore_token, snapshot_token},
};

use std::fs;
use std::io::ErrorKind;

use log::{debug, info};

/// Owns the single local profile and its file location.
///
/// Starts empty. The first [`get_user`](Self::get_user) that finds a profile
/// file caches it; later calls return the cached value without touching disk.
#[derive(Debug)]
pub struct ProfileStore {
    location: ProfileLocation,
    current: Option<Profile>,
}

impl ProfileStore {
    pub fn new(location: ProfileLocation) -> Self {
        Self {
            location,
            current: None,
        }
    }

    pub fn location(&self) -> &ProfileLocation {
        &self.location
    }

    /// Current profile, loading it from disk on first use.
    ///
    /// Returns `Ok(None)` when there is no profile file.
    pub fn get_user(&mut self) -> ProfileResult<Option<&Profile>> {
        if self.current.is_some() {
            debug!("Using cached profile");
        } else {
            self.current = Self::load_profile(&self.location)?;
        }

        Ok(self.current.as_ref())
    }

    /// Reads the profile file without consulting any cache.
    ///
    /// Returns:
    /// - `Ok(Some(profile))` - loaded successfully
    /// - `Ok(None)` - file doesn't exist
    /// - `Err(Corrupted)` - file exists but is not a valid profile
    pub fn load_profile(location: &ProfileLocation) -> ProfileResult<Option<Profile>> {
        let path = location.path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No profile file at {path:?}");
                return Ok(None);
            }
            Err(e) => return Err(ProfileError::file_read(path, e)),
        };

        let stored: StoredProfile = serde_json::from_str(&contents)
            .map_err(|e| ProfileError::corrupted(path.clone(), e.to_string()))?;

        let profile = Profile::from_source(stored, "");
        info!("Loaded profile for {}", profile.user_name);
        Ok(Some(profile))
    }

    /// Records a freshly authenticated user.
    ///
    /// Stores the token first, then writes the profile file. If the write
    /// fails the token entry is rolled back to what it was before.
    pub async fn save_user(
        &mut self,
        tokens: &dyn TokenStore,
        user: impl Into<UserSource>,
        token: AccessToken,
        environment: &str,
    ) -> ProfileResult<&Profile> {
        let profile = Profile::from_source(user, environment);

        let previous = snapshot_token(tokens, &profile.user_name).await;
        profile.set_access_token(tokens, token).await?;

        if let Err(e) = profile.save(&self.location) {
            restore_token(tokens, &profile.user_name, previous).await;
            return Err(e);
        }

        let profile: &Profile = self.current.insert(profile);
        Ok(profile)
    }

    /// Logs out the current user, if any. No user is not an error.
    pub async fn delete_user(&mut self, tokens: &dyn TokenStore) -> ProfileResult<()> {
        let Some(profile) = self.get_user()?.cloned() else {
            debug!("No user to delete");
            return Ok(());
        };

        profile.logout(tokens, &self.location).await?;
        self.current = None;
        Ok(())
    }

    /// Replaces the current user's default app and saves the profile.
    pub fn set_default_app(&mut self, default_app: Option<DefaultApp>) -> ProfileResult<&Profile> {
        self.get_user()?;

        let location = &self.location;
        let profile = self.current.as_mut().ok_or_else(ProfileError::not_logged_in)?;
        profile.default_app = default_app;
        profile.save(location)?;

        Ok(&*profile)
    }
}
