//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] designi_core::EmailError),

    /// Phone does not match the mask.
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] designi_core::PhoneError),

    /// Name is empty or whitespace.
    #[error("name is required")]
    MissingName,

    /// No user with this email and phone.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A user with this email and phone already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The users collection or session slot could not be written.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
