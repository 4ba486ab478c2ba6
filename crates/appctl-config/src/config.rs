use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_ENVIRONMENT, EnvironmentConfig, Environments, LoggingConfig, ProfileConfig,
    TokenStoreConfig,
};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use appctl_profile::ProfileLocation;
use log::{debug, info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub environment: EnvironmentSelection,
    pub environments: BTreeMap<String, EnvironmentConfig>,
    pub token_store: TokenStoreConfig,
    pub logging: LoggingConfig,
    /// Directory this config was loaded from
    #[serde(skip)]
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnvironmentSelection {
    /// Environment used for new logins when none is given
    pub default: String,
}

impl Default for EnvironmentSelection {
    fn default() -> Self {
        Self {
            default: String::from(DEFAULT_ENVIRONMENT),
        }
    }
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. APPCTL_CONFIG_DIR env var, else ~/.appctl/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply APPCTL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_in(&config_dir)
    }

    /// Load config from a specific directory.
    pub fn load_in(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            debug!("No config file at {config_path:?}, using defaults");
            Config::default()
        };

        config.config_dir = config_dir.to_path_buf();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: APPCTL_CONFIG_DIR env var > ~/.appctl/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.profile.validate()?;
        self.token_store.validate()?;

        let environments = self.environments();
        environments.validate()?;

        if !environments.contains(&self.environment.default) {
            return Err(ConfigError::environment(format!(
                "environment.default '{}' is not a configured environment (known: {})",
                self.environment.default,
                environments.names().collect::<Vec<_>>().join(", ")
            )));
        }

        Ok(())
    }

    /// Built-in environments merged with the configured ones.
    pub fn environments(&self) -> Environments {
        Environments::with_overrides(&self.environments)
    }

    pub fn default_environment(&self) -> &str {
        &self.environment.default
    }

    pub fn profile_location(&self) -> ProfileLocation {
        self.profile.location(&self.config_dir)
    }

    pub fn token_file_path(&self) -> PathBuf {
        self.token_store.file_path(&self.config_dir)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded from {:?}:", self.config_dir);
        info!("  profile: {:?}", self.profile_location().path());
        info!("  environment: {}", self.environment.default);
        info!("  token_store: {:?}", self.token_store.backend);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Profile
        Self::apply_env_string("APPCTL_PROFILE_FILE", &mut self.profile.file);

        // Environment
        Self::apply_env_string("APPCTL_ENVIRONMENT", &mut self.environment.default);

        // Token store
        Self::apply_env_parse("APPCTL_TOKEN_STORE", &mut self.token_store.backend);

        // Logging
        Self::apply_env_parse("APPCTL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("APPCTL_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring invalid {var_name}='{val}'"),
            }
        }
    }
}
