mod config;
mod environment_config;
mod error;
mod log_level;
mod logging_config;
mod profile_config;
mod token_store_config;

#[cfg(test)]
mod tests;

pub use config::{Config, EnvironmentSelection};
pub use environment_config::{EnvironmentConfig, Environments};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use profile_config::ProfileConfig;
pub use token_store_config::{TokenStoreBackend, TokenStoreConfig};

const CONFIG_DIR_ENV: &str = "APPCTL_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".appctl";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_PROFILE_DIR: &str = ".";
const DEFAULT_ENVIRONMENT: &str = "prod";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
