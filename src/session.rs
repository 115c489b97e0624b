//! Explicit authentication state for the presentation layer.
//!
//! Presence of a stored token means the user is treated as authenticated;
//! the token is never validated locally. Validity is only ever established
//! by the service's response to the next request.

use std::sync::Arc;

use crate::api::auth::{StoreError, TokenStore};

/// Authentication state loaded from the token store.
///
/// Passed to whatever renders (the CLI here) instead of living in ambient
/// global state, so the client stays testable without a UI attached.
pub struct AuthSession {
    store: Arc<dyn TokenStore>,
    token: Option<String>,
}

impl AuthSession {
    /// Read the stored token and build the session state from it.
    pub fn load(store: Arc<dyn TokenStore>) -> Result<Self, StoreError> {
        let token = store.get()?;
        Ok(Self { store, token })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persist a freshly issued token and mark the session authenticated.
    pub fn login(&mut self, token: String) -> Result<(), StoreError> {
        self.store.set(&token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Drop the persisted token and mark the session signed out.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.store.remove()?;
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::MemoryStore;

    #[test]
    fn test_fresh_store_is_unauthenticated() {
        let session = AuthSession::load(Arc::new(MemoryStore::new())).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_persists_and_authenticates() {
        let store = Arc::new(MemoryStore::new());
        let mut session = AuthSession::load(Arc::clone(&store) as Arc<dyn TokenStore>).unwrap();
        session.login("tok-1".to_string()).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(store.get().unwrap().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_logout_clears_store_and_state() {
        let store = Arc::new(MemoryStore::new());
        let mut session = AuthSession::load(Arc::clone(&store) as Arc<dyn TokenStore>).unwrap();
        session.login("tok-1".to_string()).unwrap();
        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_load_picks_up_existing_token() {
        let store = Arc::new(MemoryStore::new());
        store.set("persisted").unwrap();

        let session = AuthSession::load(store).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("persisted"));
    }
}
