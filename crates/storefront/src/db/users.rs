//! User repository.

use tracing::instrument;

use super::seed;
use crate::models::User;
use crate::store::{KeyValueStore, RecordStore, StoreError, keys};

/// Repository for the `users` collection.
pub struct UserRepository<'a, S> {
    store: &'a RecordStore<S>,
}

impl<'a, S: KeyValueStore> UserRepository<'a, S> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a RecordStore<S>) -> Self {
        Self { store }
    }

    /// All users in store order, or the seed if the collection is absent.
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.store
            .read(keys::USERS)
            .unwrap_or_else(seed::users)
    }

    /// Append a user and persist the collection.
    ///
    /// No uniqueness check is made here.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be written.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.list();
        users.push(user.clone());
        self.store.write(keys::USERS, &users)?;
        tracing::debug!(count = users.len(), "user appended");
        Ok(())
    }

    /// First user whose email and phone both match exactly.
    #[must_use]
    pub fn find_by_credentials(&self, email: &str, phone: &str) -> Option<User> {
        self.list()
            .into_iter()
            .find(|u| u.email.as_str() == email && u.phone.as_str() == phone)
    }
}
