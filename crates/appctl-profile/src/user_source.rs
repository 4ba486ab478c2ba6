//! Input shapes a [`Profile`](crate::Profile) can be built from.
//!
//! The identity provider and the profile file name the same fields
//! differently (`id` vs `userId`, `name` vs `userName`). Each shape is its own
//! type and [`Profile::from_source`](crate::Profile::from_source) maps both onto
//! the canonical fields.

use crate::DefaultApp;

use serde::{Deserialize, Serialize};

/// User record as returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
}

/// Profile record as persisted in the profile file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub default_app: Option<DefaultApp>,
}

#[derive(Debug, Clone)]
pub enum UserSource {
    Server(ServerUser),
    Stored(StoredProfile),
}

impl From<ServerUser> for UserSource {
    fn from(user: ServerUser) -> Self {
        UserSource::Server(user)
    }
}

impl From<StoredProfile> for UserSource {
    fn from(stored: StoredProfile) -> Self {
        UserSource::Stored(stored)
    }
}
