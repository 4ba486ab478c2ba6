use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE_FILENAME: &str = "profile.json";

/// Where the profile file lives: `<dir>/<file_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLocation {
    dir: PathBuf,
    file_name: String,
}

impl ProfileLocation {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Location using the default file name inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, DEFAULT_PROFILE_FILENAME)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}
