use crate::tests::access_token;
use crate::{AccessToken, FileTokenStore, MemoryTokenStore, ProfileError, TokenStore};

use googletest::prelude::*;
use tempfile::TempDir;

// =========================================================================
// MemoryTokenStore
// =========================================================================

#[tokio::test]
async fn given_memory_store_when_set_then_get_returns_token() {
    let store = MemoryTokenStore::new();

    store.set("alice", access_token()).await.unwrap();

    assert_eq!(store.get("alice").await.unwrap(), Some(access_token()));
    assert!(store.get("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn given_memory_store_when_remove_missing_key_then_ok() {
    let store = MemoryTokenStore::new();

    assert_that!(store.remove("nobody").await, ok(anything()));
}

// =========================================================================
// FileTokenStore
// =========================================================================

#[tokio::test]
async fn given_file_store_when_set_then_new_instance_reads_token() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("tokens.json");

    FileTokenStore::new(&path)
        .set("alice", access_token())
        .await
        .unwrap();

    let reopened = FileTokenStore::new(&path);
    assert_eq!(reopened.get("alice").await.unwrap(), Some(access_token()));
}

#[tokio::test]
async fn given_file_store_with_two_users_when_remove_one_then_other_kept() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp.path().join("tokens.json"));
    store.set("alice", access_token()).await.unwrap();
    store
        .set("bob", AccessToken::new(None, "bob-secret"))
        .await
        .unwrap();

    store.remove("alice").await.unwrap();

    assert!(store.get("alice").await.unwrap().is_none());
    assert_that!(store.get("bob").await.unwrap().unwrap().token, eq("bob-secret"));
}

#[tokio::test]
async fn given_no_token_file_when_get_or_remove_then_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp.path().join("tokens.json"));

    assert!(store.get("alice").await.unwrap().is_none());
    assert_that!(store.remove("alice").await, ok(anything()));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn given_corrupt_token_file_when_get_then_token_store_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tokens.json");
    std::fs::write(&path, "garbage").unwrap();

    let result = FileTokenStore::new(&path).get("alice").await;

    assert!(matches!(result, Err(ProfileError::TokenStore { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn given_file_store_when_set_then_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tokens.json");

    FileTokenStore::new(&path)
        .set("alice", access_token())
        .await
        .unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn given_access_token_when_debug_formatted_then_secret_redacted() {
    let rendered = format!("{:?}", access_token());

    assert!(!rendered.contains("secret-value"));
    assert!(rendered.contains("tok-1"));
}
