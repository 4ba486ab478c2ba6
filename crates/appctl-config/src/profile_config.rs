use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROFILE_DIR};

use std::path::Path;

use appctl_profile::{DEFAULT_PROFILE_FILENAME, ProfileLocation};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Profile directory, relative to the config directory unless absolute
    pub dir: String,
    /// Profile file name inside `dir`
    pub file: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_PROFILE_DIR),
            file: String::from(DEFAULT_PROFILE_FILENAME),
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::profile("profile.file must not be empty"));
        }

        let is_bare_name = Path::new(&self.file)
            .file_name()
            .is_some_and(|name| name == self.file.as_str());
        if !is_bare_name {
            return Err(ConfigError::profile(format!(
                "profile.file must be a file name without directories, got '{}'",
                self.file
            )));
        }

        if self.dir.trim().is_empty() {
            return Err(ConfigError::profile("profile.dir must not be empty"));
        }

        Ok(())
    }

    pub fn location(&self, config_dir: &Path) -> ProfileLocation {
        ProfileLocation::new(config_dir.join(&self.dir), self.file.clone())
    }
}
