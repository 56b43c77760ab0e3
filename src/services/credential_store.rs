//! Local credential storage for the Puka client.
//!
//! The auth token lives in persisted local client state under the key
//! `puka_auth_token`. Token acquisition is out of scope; this module only
//! reads and writes the persisted value. The gateway consumes it through the
//! [`CredentialSource`] trait so tests can inject a token without a real
//! storage backend.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::types::errors::CredentialError;

/// Local-state key under which the auth token is persisted.
pub const AUTH_TOKEN_KEY: &str = "puka_auth_token";

/// Capability for reading the auth token from persisted local state.
pub trait CredentialSource {
    /// Returns the stored auth token, or `None` if no token is persisted.
    fn auth_token(&self) -> Result<Option<String>, CredentialError>;
}

/// Fixed token source for tests and embedders that manage the token themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl CredentialSource for StaticToken {
    fn auth_token(&self) -> Result<Option<String>, CredentialError> {
        Ok(self.0.clone())
    }
}

/// Persisted local client state backed by a SQLite key/value table.
pub struct LocalStateStore {
    conn: Connection,
}

impl LocalStateStore {
    /// Opens (or creates) the local-state database at the given path and
    /// ensures the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CredentialError> {
        let conn = Connection::open(path)
            .map_err(|e| CredentialError::Storage(e.to_string()))?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Opens an in-memory local-state database. The state is discarded when
    /// the store is dropped — useful for testing.
    pub fn open_in_memory() -> Result<Self, CredentialError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CredentialError::Storage(e.to_string()))?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Idempotent schema setup, safe to run on every open.
    fn run_migrations(&self) -> Result<(), CredentialError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS local_state (
                     key TEXT PRIMARY KEY,
                     value TEXT NOT NULL,
                     updated_at INTEGER NOT NULL
                 );",
            )
            .map_err(|e| CredentialError::Storage(e.to_string()))
    }

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a value from local state.
    pub fn get(&self, key: &str) -> Result<Option<String>, CredentialError> {
        let result = self.conn.query_row(
            "SELECT value FROM local_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(CredentialError::Storage(e.to_string())),
        }
    }

    /// Writes a value into local state, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO local_state (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| CredentialError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Removes a key from local state. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), CredentialError> {
        self.conn
            .execute("DELETE FROM local_state WHERE key = ?1", params![key])
            .map_err(|e| CredentialError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Persists the auth token under [`AUTH_TOKEN_KEY`].
    pub fn set_auth_token(&self, token: &str) -> Result<(), CredentialError> {
        self.set(AUTH_TOKEN_KEY, token)
    }

    /// Clears any persisted auth token.
    pub fn clear_auth_token(&self) -> Result<(), CredentialError> {
        self.remove(AUTH_TOKEN_KEY)
    }
}

impl CredentialSource for LocalStateStore {
    fn auth_token(&self) -> Result<Option<String>, CredentialError> {
        self.get(AUTH_TOKEN_KEY)
    }
}
