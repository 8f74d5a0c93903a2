//! Session manager.
//!
//! The session is one slot holding a copy of the logged-in [`User`]. There
//! is no token and no expiry; an empty slot means logged out.

use tracing::instrument;

use crate::models::User;
use crate::store::{KeyValueStore, RecordStore, StoreError, keys};

/// Tracks the current user.
pub struct SessionManager<'a, S> {
    store: &'a RecordStore<S>,
}

impl<'a, S: KeyValueStore> SessionManager<'a, S> {
    /// Create a session manager over `store`.
    #[must_use]
    pub const fn new(store: &'a RecordStore<S>) -> Self {
        Self { store }
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.store.read(keys::CURRENT_USER)
    }

    /// Replace the session. `None` removes the slot entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the slot cannot be written.
    #[instrument(skip(self, user), fields(user_id = user.map(|u| u.id.as_str())))]
    pub fn set_current_user(&self, user: Option<&User>) -> Result<(), StoreError> {
        match user {
            Some(user) => self.store.write(keys::CURRENT_USER, user),
            None => self.store.clear(keys::CURRENT_USER),
        }
    }

    /// Log out.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the slot cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.set_current_user(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::seed;
    use crate::store::MemoryStore;

    #[test]
    fn test_empty_session() {
        let store = RecordStore::new(MemoryStore::new());
        assert_eq!(SessionManager::new(&store).current_user(), None);
    }

    #[test]
    fn test_set_then_clear_leaves_no_key() {
        let store = RecordStore::new(MemoryStore::new());
        let session = SessionManager::new(&store);
        let admin = seed::admin();

        session.set_current_user(Some(&admin)).unwrap();
        assert_eq!(session.current_user(), Some(admin));

        session.clear().unwrap();
        assert_eq!(session.current_user(), None);
        assert!(!store.backend().contains_key(keys::CURRENT_USER));
    }

    #[test]
    fn test_overwrite_is_wholesale() {
        let store = RecordStore::new(MemoryStore::new());
        let session = SessionManager::new(&store);
        let admin = seed::admin();
        let mut other = seed::admin();
        other.id = designi_core::UserId::new("42");
        other.name = "Outra".to_owned();

        session.set_current_user(Some(&admin)).unwrap();
        session.set_current_user(Some(&other)).unwrap();
        assert_eq!(session.current_user(), Some(other));
    }

    #[test]
    fn test_corrupted_session_reads_as_logged_out() {
        let store = RecordStore::new(MemoryStore::new());
        store.backend().set(keys::CURRENT_USER, "null-ish").unwrap();
        assert_eq!(SessionManager::new(&store).current_user(), None);
    }
}
