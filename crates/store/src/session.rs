//! Signed-in identity, persisted across restarts through a small
//! key-value storage seam.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::models::User;
use crate::{Repository, StoreError};

/// Storage key holding the signed-in user's ID.
pub const USER_ID_KEY: &str = "userId";

/// Minimal string key-value store, e.g. a browser's local storage or a file.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Process-local storage. Clone it before handing it over to simulate a
/// restart with the same persisted state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Tracks the current user and keeps `storage` in step with it.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<User>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, current: None }
    }

    /// Reload the persisted user, if any. An ID that no longer resolves is
    /// ignored and the session stays signed out.
    pub fn restore(&mut self, repo: &Repository) -> Option<&User> {
        let id = self.storage.get(USER_ID_KEY)?;
        match repo.get_user(&id) {
            Ok(user) => {
                debug!(user_id = %id, "session restored");
                self.current = Some(user.clone());
            }
            Err(_) => warn!(user_id = %id, "persisted user no longer exists"),
        }
        self.current.as_ref()
    }

    pub fn login(&mut self, repo: &Repository, email: &str, password: &str) -> Result<&User, StoreError> {
        let user = repo.authenticate(email, password)?;
        self.storage.set(USER_ID_KEY, &user.user_id);
        info!(user_id = %user.user_id, "signed in");
        Ok(self.current.insert(user.clone()))
    }

    /// Become another known user. Unknown IDs leave the session unchanged.
    pub fn switch_user(&mut self, repo: &Repository, user_id: &str) -> Result<&User, StoreError> {
        let user = repo.get_user(user_id)?;
        self.storage.set(USER_ID_KEY, user_id);
        info!(%user_id, "switched user");
        Ok(self.current.insert(user.clone()))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.user_id, "signed out");
        }
        self.storage.remove(USER_ID_KEY);
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_persists_and_restore_reads_it_back() {
        let repo = Repository::seeded();
        let mut session = SessionStore::new(MemoryStorage::default());
        session.login(&repo, "dev@merkle.com", "demo123").unwrap();

        let mut restarted = SessionStore::new(session.into_storage());
        assert_eq!(restarted.restore(&repo).map(|u| u.user_id.as_str()), Some("dev001"));
    }

    #[test]
    fn failed_login_keeps_previous_state() {
        let repo = Repository::seeded();
        let mut session = SessionStore::new(MemoryStorage::default());
        assert_eq!(
            session.login(&repo, "dev@merkle.com", "wrong").unwrap_err(),
            StoreError::InvalidCredentials
        );
        assert!(!session.is_authenticated());
        assert!(session.storage().get(USER_ID_KEY).is_none());
    }

    #[test]
    fn stale_persisted_id_is_ignored() {
        let repo = Repository::seeded();
        let mut storage = MemoryStorage::default();
        storage.set(USER_ID_KEY, "gone001");

        let mut session = SessionStore::new(storage);
        assert!(session.restore(&repo).is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn switch_to_unknown_user_changes_nothing() {
        let repo = Repository::seeded();
        let mut session = SessionStore::new(MemoryStorage::default());
        session.switch_user(&repo, "pm001").unwrap();

        assert!(session.switch_user(&repo, "nobody").is_err());
        assert_eq!(session.current_user().unwrap().user_id, "pm001");
        assert_eq!(session.storage().get(USER_ID_KEY).as_deref(), Some("pm001"));
    }

    #[test]
    fn logout_clears_the_key() {
        let repo = Repository::seeded();
        let mut session = SessionStore::new(MemoryStorage::default());
        session.switch_user(&repo, "ba001").unwrap();
        session.logout();

        assert!(session.current_user().is_none());
        assert!(session.storage().get(USER_ID_KEY).is_none());
    }
}
