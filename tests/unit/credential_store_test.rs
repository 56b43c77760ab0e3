//! Unit tests for the local credential store.
//!
//! Exercises the `CredentialSource` trait through the SQLite-backed
//! `LocalStateStore`, using an in-memory database and a temp-file database
//! for the persistence round trip.

use puka_client::services::credential_store::{
    CredentialSource, LocalStateStore, StaticToken, AUTH_TOKEN_KEY,
};

#[test]
fn test_missing_token_reads_as_none() {
    let store = LocalStateStore::open_in_memory().expect("open in-memory store");
    assert_eq!(store.auth_token().unwrap(), None);
}

#[test]
fn test_set_and_read_token() {
    let store = LocalStateStore::open_in_memory().unwrap();

    store.set_auth_token("s3cret").unwrap();
    assert_eq!(store.auth_token().unwrap().as_deref(), Some("s3cret"));

    // Overwrite replaces, never appends
    store.set_auth_token("rotated").unwrap();
    assert_eq!(store.auth_token().unwrap().as_deref(), Some("rotated"));
}

#[test]
fn test_clear_token() {
    let store = LocalStateStore::open_in_memory().unwrap();

    store.set_auth_token("s3cret").unwrap();
    store.clear_auth_token().unwrap();
    assert_eq!(store.auth_token().unwrap(), None);

    // Clearing an absent token is not an error
    store.clear_auth_token().unwrap();
}

#[test]
fn test_token_is_stored_under_documented_key() {
    let store = LocalStateStore::open_in_memory().unwrap();
    store.set_auth_token("s3cret").unwrap();
    assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("s3cret"));
}

/// The token survives closing and reopening the backing database.
#[test]
fn test_token_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_state.db");

    {
        let store = LocalStateStore::open(&path).unwrap();
        store.set_auth_token("persisted").unwrap();
    }

    let reopened = LocalStateStore::open(&path).unwrap();
    assert_eq!(reopened.auth_token().unwrap().as_deref(), Some("persisted"));
}

#[test]
fn test_static_token_source() {
    assert_eq!(StaticToken(None).auth_token().unwrap(), None);
    assert_eq!(
        StaticToken(Some("t".to_string())).auth_token().unwrap().as_deref(),
        Some("t")
    );
}
