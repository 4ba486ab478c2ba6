//! Local profile storage for the `appctl` command-line tool.
//!
//! A single logged-in user is persisted as a JSON profile file. The access
//! token lives in a separate [`TokenStore`] keyed by user name.

mod access_token;
mod default_app;
mod environment;
mod error;
mod location;
mod profile;
mod store;
mod token_store;
mod user_source;

#[cfg(test)]
mod tests;

pub use access_token::AccessToken;
pub use default_app::DefaultApp;
pub use environment::EnvironmentResolver;
pub use error::{ProfileError, Result as ProfileResult};
pub use location::{DEFAULT_PROFILE_FILENAME, ProfileLocation};
pub use profile::Profile;
pub use store::ProfileStore;
pub use token_store::{
    TokenStore,
    file_token_store::{DEFAULT_TOKEN_FILENAME, FileTokenStore},
    keyring_token_store::{DEFAULT_KEYRING_SERVICE, KeyringTokenStore},
    memory_token_store::MemoryTokenStore,
};
pub use user_source::{ServerUser, StoredProfile, UserSource};
