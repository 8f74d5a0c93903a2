//! Authentication service.
//!
//! Accounts are identified by email and phone. The phone is compared as a
//! plain string and plays the role of a password; nothing is hashed.

mod error;

pub use error::AuthError;

use tracing::instrument;

use designi_core::{Email, Phone, UserId, UserRole};

use crate::db::UserRepository;
use crate::models::User;
use crate::services::session::SessionManager;
use crate::store::{KeyValueStore, RecordStore};

/// Authentication service.
///
/// Handles registration, login and logout.
pub struct AuthService<'a, S> {
    users: UserRepository<'a, S>,
    session: SessionManager<'a, S>,
}

impl<'a, S: KeyValueStore> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a RecordStore<S>) -> Self {
        Self {
            users: UserRepository::new(store),
            session: SessionManager::new(store),
        }
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// Create a `USER` account and append it to the users collection.
    ///
    /// Uniqueness is the caller's concern (see [`Self::sign_up`]).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the collection cannot be written.
    #[instrument(skip(self, name, phone), fields(email = %email))]
    pub fn register(&self, name: &str, email: Email, phone: Phone) -> Result<User, AuthError> {
        let user = User {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            phone,
            role: UserRole::User,
        };
        self.users.insert(&user)?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Find the user with exactly this email and phone.
    #[must_use]
    pub fn authenticate(&self, email: &str, phone: &str) -> Option<User> {
        self.users.find_by_credentials(email, phone)
    }

    // =========================================================================
    // Flows
    // =========================================================================

    /// Validate the sign-up form, register, and log the new user in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingName`, `AuthError::InvalidEmail` or
    /// `AuthError::InvalidPhone` for bad input.
    /// Returns `AuthError::UserAlreadyExists` if the credentials are taken.
    /// Returns `AuthError::Store` if persisting fails.
    #[instrument(skip(self, name, phone))]
    pub fn sign_up(&self, name: &str, email: &str, phone: &str) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Email::parse(email)?;
        let phone = Phone::parse(phone)?;

        if self.authenticate(email.as_str(), phone.as_str()).is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = self.register(name, email, phone)?;
        self.session.set_current_user(Some(&user))?;
        Ok(user)
    }

    /// Log in with email and phone.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPhone` if the phone is not masked.
    /// Returns `AuthError::InvalidCredentials` if no user matches; a wrong
    /// email and a wrong phone are not told apart.
    /// Returns `AuthError::Store` if the session cannot be saved.
    #[instrument(skip(self, phone))]
    pub fn sign_in(&self, email: &str, phone: &str) -> Result<User, AuthError> {
        let phone = Phone::parse(phone)?;
        let Some(user) = self.authenticate(email, phone.as_str()) else {
            tracing::info!("login rejected");
            return Err(AuthError::InvalidCredentials);
        };
        self.session.set_current_user(Some(&user))?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    /// Log out the current user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the session cannot be cleared.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        self.session.clear()?;
        Ok(())
    }
}
