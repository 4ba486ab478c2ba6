//! Default application selector (`owner/app`).

use crate::{ProfileError, ProfileResult};

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Each segment: 1-100 of letters, digits, `-`, `_`, `.`.
static APP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9\-_.]{1,100})/([A-Za-z0-9\-_.]{1,100})$")
        .unwrap_or_else(|e| panic!("invalid app pattern: {e}"))
});

/// The app a command targets when none is given explicitly.
///
/// `identifier` is always `"{owner_name}/{app_name}"`; the only ways to build
/// one are [`DefaultApp::parse`] and [`DefaultApp::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DefaultAppRecord")]
pub struct DefaultApp {
    owner_name: String,
    app_name: String,
    identifier: String,
}

/// On-disk shape. The stored identifier is ignored and rebuilt.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultAppRecord {
    owner_name: String,
    app_name: String,
}

impl DefaultApp {
    /// Parses `owner/app`. Returns `None` when the string does not match.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = APP_PATTERN.captures(value)?;
        Some(Self::from_parts(&captures[1], &captures[2]))
    }

    /// Builds from separate segments, validating both.
    pub fn new(owner_name: &str, app_name: &str) -> ProfileResult<Self> {
        Self::parse(&format!("{owner_name}/{app_name}"))
            .ok_or_else(|| ProfileError::invalid_default_app(format!("{owner_name}/{app_name}")))
    }

    fn from_parts(owner_name: &str, app_name: &str) -> Self {
        Self {
            owner_name: owner_name.to_string(),
            app_name: app_name.to_string(),
            identifier: format!("{owner_name}/{app_name}"),
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl TryFrom<DefaultAppRecord> for DefaultApp {
    type Error = String;

    fn try_from(record: DefaultAppRecord) -> Result<Self, Self::Error> {
        DefaultApp::new(&record.owner_name, &record.app_name).map_err(|e| e.to_string())
    }
}

impl FromStr for DefaultApp {
    type Err = ProfileError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ProfileError::invalid_default_app(s))
    }
}

impl fmt::Display for DefaultApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
