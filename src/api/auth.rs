//! Session token persistence.
//!
//! The service issues an opaque bearer token on login; the client keeps it in
//! the OS credential store under a fixed service/entry name. Persistence sits
//! behind the `TokenStore` trait so the keyring backend can be swapped for an
//! in-memory store in tests.

use keyring::Entry;
use std::sync::Mutex;
use thiserror::Error;

/// Credential store service name for the timetrack client.
const SERVICE_NAME: &str = "com.timetrack.client";

/// Entry name under which the session token is stored.
const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Token store operation failed: {0}")]
    OperationFailed(String),
}

impl From<keyring::Error> for StoreError {
    fn from(err: keyring::Error) -> Self {
        StoreError::OperationFailed(err.to_string())
    }
}

/// Key-value persistence for the session token.
///
/// At most one token is held at a time. The token is never validated locally;
/// holding one only means the next request will carry it.
pub trait TokenStore: Send + Sync {
    /// Retrieve the stored token. `None` means no token is stored (user never
    /// logged in or was logged out) and is not an error.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Store a token, overwriting any prior value.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Delete the stored token. Idempotent if none is stored.
    fn remove(&self) -> Result<(), StoreError>;
}

/// Token store backed by the OS credential store.
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<Entry, StoreError> {
        Ok(Entry::new(SERVICE_NAME, TOKEN_KEY)?)
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        Self::entry()?.set_password(token)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        match Self::entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted, idempotent
            Err(e) => Err(StoreError::from(e)),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_token() {
        let store = MemoryStore::new();
        store.set("tok-123").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_set_overwrites_prior_token() {
        let store = MemoryStore::new();
        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_get_without_set_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let store = MemoryStore::new();
        store.set("tok-123").unwrap();
        store.remove().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.remove().unwrap();
        store.remove().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
