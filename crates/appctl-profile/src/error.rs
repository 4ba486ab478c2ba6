use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors related to local profile management.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to create profile directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read profile file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write profile file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to delete profile file at {path}: {source} {location}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Profile file corrupted at {path}: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize profile: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Token store error for '{key}': {message} {location}")]
    TokenStore {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown environment '{name}' {location}")]
    UnknownEnvironment {
        name: String,
        location: ErrorLocation,
    },

    #[error("Invalid app '{value}', expected <owner>/<app> {location}")]
    InvalidDefaultApp {
        value: String,
        location: ErrorLocation,
    },

    #[error("No user is logged in {location}")]
    NotLoggedIn { location: ErrorLocation },
}

impl ProfileError {
    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::DirCreation { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. } => {
                "Unable to write to the profile directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read the profile file. \
                   Check file permissions."
            }
            Self::FileDelete { .. } => {
                "Unable to delete the profile file. \
                   Check file permissions and remove it manually if needed."
            }
            Self::Corrupted { .. } => {
                "Your profile file is corrupted. \
                   Delete it and log in again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing profile data. \
                   Please report this issue."
            }
            Self::TokenStore { .. } => {
                "Unable to access the token store. \
                   Check that the credential service is available or switch token_store.backend."
            }
            Self::UnknownEnvironment { .. } => {
                "The profile refers to an environment that is not configured. \
                   Run `appctl env list` to see the available environments."
            }
            Self::InvalidDefaultApp { .. } => {
                "App names look like <owner>/<app> using letters, digits, '-', '_' or '.'."
            }
            Self::NotLoggedIn { .. } => "Log in first with `appctl login`.",
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileDelete error at caller location.
    #[track_caller]
    pub fn file_delete(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileDelete {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Corrupted error at caller location.
    #[track_caller]
    pub fn corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates TokenStore error at caller location.
    #[track_caller]
    pub fn token_store(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TokenStore {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_environment(name: impl Into<String>) -> Self {
        Self::UnknownEnvironment {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_default_app(value: impl Into<String>) -> Self {
        Self::InvalidDefaultApp {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
