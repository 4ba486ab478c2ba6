use std::fmt;

use serde::{Deserialize, Serialize};

/// Secret credential kept in the token store, never in the profile file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Server-side identifier of the token, when the identity provider issues one.
    #[serde(default)]
    pub id: Option<String>,
    pub token: String,
}

impl AccessToken {
    pub fn new(id: Option<String>, token: impl Into<String>) -> Self {
        Self {
            id,
            token: token.into(),
        }
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish()
    }
}
