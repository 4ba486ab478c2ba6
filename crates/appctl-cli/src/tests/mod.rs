mod cli;

use crate::Session;

use appctl_config::Environments;
use appctl_profile::{MemoryTokenStore, ProfileLocation, ProfileStore};
use tempfile::TempDir;

/// Session over a temp profile directory and an in-memory token store.
pub(crate) fn memory_session() -> (TempDir, Session) {
    let temp = TempDir::new().unwrap();
    let session = Session::new(
        ProfileStore::new(ProfileLocation::in_dir(temp.path())),
        Box::new(MemoryTokenStore::new()),
        Environments::default(),
        "prod",
    );
    (temp, session)
}
