use crate::tests::{
    SingleEnvironment, TEST_ENDPOINT, TEST_ENVIRONMENT, UnreadableTokenStore, access_token,
    server_user, temp_location,
};
use crate::{
    DefaultApp, MemoryTokenStore, Profile, ProfileError, ProfileStore, StoredProfile, TokenStore,
};

use googletest::prelude::*;

fn stored_profile(environment: &str) -> StoredProfile {
    StoredProfile {
        user_id: "u-9".into(),
        user_name: "bob".into(),
        display_name: "Bob".into(),
        email: "bob@example.com".into(),
        environment: environment.into(),
        default_app: DefaultApp::parse("acme/myapp"),
    }
}

// =========================================================================
// Normalization
// =========================================================================

#[test]
fn given_server_user_when_from_source_then_maps_id_and_name() {
    let profile = Profile::from_source(server_user(), "staging");

    assert_that!(profile.user_id, eq("u-123"));
    assert_that!(profile.user_name, eq("alice"));
    assert_that!(profile.display_name, eq("Alice Example"));
    assert_that!(profile.email, eq("alice@example.com"));
    assert_that!(profile.environment, eq("staging"));
    assert!(profile.default_app.is_none());
}

#[test]
fn given_stored_profile_with_environment_when_from_source_then_keeps_stored_environment() {
    let profile = Profile::from_source(stored_profile("staging"), "prod");

    assert_that!(profile.user_id, eq("u-9"));
    assert_that!(profile.user_name, eq("bob"));
    assert_that!(profile.environment, eq("staging"));
    assert_eq!(profile.default_app, DefaultApp::parse("acme/myapp"));
}

#[test]
fn given_stored_profile_without_environment_when_from_source_then_uses_fallback() {
    let profile = Profile::from_source(stored_profile(""), "prod");

    assert_that!(profile.environment, eq("prod"));
}

#[test]
fn given_server_shaped_json_when_deserialized_then_normalizes() {
    let json = r#"{"id":"u-1","name":"carol","displayName":"Carol","email":"c@example.com"}"#;
    let user: crate::ServerUser = serde_json::from_str(json).unwrap();

    let profile = Profile::from_source(user, TEST_ENVIRONMENT);

    assert_that!(profile.user_id, eq("u-1"));
    assert_that!(profile.user_name, eq("carol"));
}

// =========================================================================
// Save
// =========================================================================

#[test]
fn given_profile_when_saved_then_file_has_exact_json_shape() {
    let (_temp, location) = temp_location();
    let mut profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.default_app = DefaultApp::parse("acme/myapp");

    profile.save(&location).unwrap();

    let contents = std::fs::read_to_string(location.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "userId": "u-123",
            "userName": "alice",
            "displayName": "Alice Example",
            "email": "alice@example.com",
            "environment": "prod",
            "defaultApp": {
                "ownerName": "acme",
                "appName": "myapp",
                "identifier": "acme/myapp"
            }
        })
    );
}

#[test]
fn given_no_default_app_when_saved_then_default_app_is_null() {
    let (_temp, location) = temp_location();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);

    profile.save(&location).unwrap();

    let contents = std::fs::read_to_string(location.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(json["defaultApp"].is_null());
    assert!(json.get("accessToken").is_none());
}

#[test]
fn given_missing_directory_when_saved_then_directory_created() {
    let (_temp, location) = temp_location();
    assert!(!location.dir().exists());

    Profile::from_source(server_user(), TEST_ENVIRONMENT)
        .save(&location)
        .unwrap();

    assert!(location.dir().is_dir());
    assert!(location.path().is_file());
}

#[test]
fn given_existing_file_when_saved_then_overwritten() {
    let (_temp, location) = temp_location();
    let mut profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.save(&location).unwrap();

    profile.email = "new@example.com".into();
    profile.save(&location).unwrap();

    let loaded = ProfileStore::load_profile(&location).unwrap().unwrap();
    assert_that!(loaded.email, eq("new@example.com"));
}

#[test]
fn given_saved_profile_when_loaded_fresh_then_fields_identical() {
    let (_temp, location) = temp_location();
    let mut original = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    original.default_app = DefaultApp::parse("acme/myapp");

    original.save(&location).unwrap();
    let restored = ProfileStore::load_profile(&location).unwrap().unwrap();

    assert_eq!(restored, original);
}

#[test]
fn given_save_when_chained_then_returns_same_profile() {
    let (_temp, location) = temp_location();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);

    let returned = profile.save(&location).unwrap();

    assert!(std::ptr::eq(returned, &profile));
}

#[test]
fn given_directory_path_is_a_file_when_saved_then_dir_creation_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let location = crate::ProfileLocation::in_dir(blocker.join("nested"));

    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    let result = profile.save(&location);

    assert!(matches!(result, Err(ProfileError::DirCreation { .. })));
}

#[test]
fn given_target_is_directory_when_saved_then_rename_error_and_no_temp_file_left() {
    let (_temp, location) = temp_location();
    std::fs::create_dir_all(location.path().join("occupied")).unwrap();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);

    let result = profile.save(&location);

    assert!(matches!(result, Err(ProfileError::AtomicRename { .. })));
    let leftovers: Vec<_> = std::fs::read_dir(location.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains(".tmp."))
        .collect();
    assert_that!(leftovers, is_empty());
}

// =========================================================================
// Token accessors
// =========================================================================

#[tokio::test]
async fn given_profile_when_set_access_token_then_stored_under_user_name() {
    let (_temp, location) = temp_location();
    let tokens = MemoryTokenStore::new();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);

    profile.set_access_token(&tokens, access_token()).await.unwrap();

    assert_eq!(tokens.get("alice").await.unwrap(), Some(access_token()));
    assert!(!location.path().exists());
}

#[tokio::test]
async fn given_stored_token_when_access_token_then_returns_token_and_id() {
    let tokens = MemoryTokenStore::new();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.set_access_token(&tokens, access_token()).await.unwrap();

    let token = profile.access_token(&tokens).await.unwrap();
    let token_id = profile.access_token_id(&tokens).await.unwrap();

    assert_that!(token.unwrap().token, eq("secret-value"));
    assert_that!(token_id, some(eq("tok-1")));
}

#[tokio::test]
async fn given_no_token_when_access_token_then_none() {
    let tokens = MemoryTokenStore::new();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);

    assert!(profile.access_token(&tokens).await.unwrap().is_none());
    assert!(profile.access_token_id(&tokens).await.unwrap().is_none());
}

// =========================================================================
// Endpoint
// =========================================================================

#[test]
fn given_known_environment_when_endpoint_then_resolves() {
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);

    assert_that!(profile.endpoint(&SingleEnvironment).unwrap(), eq(TEST_ENDPOINT));
}

#[test]
fn given_unknown_environment_when_endpoint_then_error() {
    let profile = Profile::from_source(server_user(), "mars");

    let result = profile.endpoint(&SingleEnvironment);

    assert!(matches!(
        result,
        Err(ProfileError::UnknownEnvironment { ref name, .. }) if name == "mars"
    ));
}

// =========================================================================
// Logout
// =========================================================================

#[tokio::test]
async fn given_saved_profile_when_logout_then_token_and_file_removed() {
    let (_temp, location) = temp_location();
    let tokens = MemoryTokenStore::new();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.save(&location).unwrap();
    profile.set_access_token(&tokens, access_token()).await.unwrap();

    profile.logout(&tokens, &location).await.unwrap();

    assert!(tokens.get("alice").await.unwrap().is_none());
    assert!(!location.path().exists());
}

#[tokio::test]
async fn given_logged_out_profile_when_logout_again_then_succeeds() {
    let (_temp, location) = temp_location();
    let tokens = MemoryTokenStore::new();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.save(&location).unwrap();
    profile.logout(&tokens, &location).await.unwrap();

    let result = profile.logout(&tokens, &location).await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_undeletable_file_when_logout_then_error_and_token_restored() {
    let (_temp, location) = temp_location();
    let tokens = MemoryTokenStore::new();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.set_access_token(&tokens, access_token()).await.unwrap();
    // A directory where the file should be cannot be removed with remove_file.
    std::fs::create_dir_all(location.path()).unwrap();

    let result = profile.logout(&tokens, &location).await;

    assert!(matches!(result, Err(ProfileError::FileDelete { .. })));
    assert_eq!(tokens.get("alice").await.unwrap(), Some(access_token()));
}

#[tokio::test]
async fn given_unreadable_token_entry_when_logout_then_entry_and_file_removed() {
    let (_temp, location) = temp_location();
    let tokens = UnreadableTokenStore::default();
    let profile = Profile::from_source(server_user(), TEST_ENVIRONMENT);
    profile.save(&location).unwrap();
    profile.set_access_token(&tokens, access_token()).await.unwrap();

    let result = profile.logout(&tokens, &location).await;

    assert_that!(result, ok(anything()));
    assert!(tokens.inner.get("alice").await.unwrap().is_none());
    assert!(!location.path().exists());
}
