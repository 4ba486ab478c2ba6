//! Named backend environments and the endpoint each one serves.

use crate::{ConfigError, ConfigErrorResult};

use std::collections::BTreeMap;

use appctl_profile::EnvironmentResolver;
use serde::{Deserialize, Serialize};

const BUILTIN_ENVIRONMENTS: &[(&str, &str, &str)] = &[
    ("prod", "https://api.appctl.io", "Production"),
    ("staging", "https://api.staging.appctl.io", "Staging"),
    ("local", "http://localhost:8080", "Local development server"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub endpoint: String,
    #[serde(default)]
    pub description: String,
}

impl EnvironmentConfig {
    pub fn validate(&self, name: &str) -> ConfigErrorResult<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::environment(format!(
                "environments.{name}.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        Ok(())
    }
}

/// Built-in environments overlaid with the ones from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environments(BTreeMap<String, EnvironmentConfig>);

impl Environments {
    pub fn with_overrides(overrides: &BTreeMap<String, EnvironmentConfig>) -> Self {
        let mut table: BTreeMap<String, EnvironmentConfig> = BUILTIN_ENVIRONMENTS
            .iter()
            .map(|(name, endpoint, description)| {
                (
                    name.to_string(),
                    EnvironmentConfig {
                        endpoint: endpoint.to_string(),
                        description: description.to_string(),
                    },
                )
            })
            .collect();

        table.extend(
            overrides
                .iter()
                .map(|(name, env)| (name.clone(), env.clone())),
        );

        Self(table)
    }

    pub fn get(&self, name: &str) -> Option<&EnvironmentConfig> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Environment names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvironmentConfig)> {
        self.0.iter().map(|(name, env)| (name.as_str(), env))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, env) in self.iter() {
            env.validate(name)?;
        }
        Ok(())
    }
}

impl Default for Environments {
    fn default() -> Self {
        Self::with_overrides(&BTreeMap::new())
    }
}

impl EnvironmentResolver for Environments {
    fn endpoint(&self, name: &str) -> Option<String> {
        self.get(name).map(|env| env.endpoint.clone())
    }
}
