//! Persistent record store.
//!
//! Three collections live in a durable string-keyed substrate:
//!
//! | key            | value                          |
//! |----------------|--------------------------------|
//! | `users`        | JSON array of `User`           |
//! | `resources`    | JSON array of `DesignResource` |
//! | `current_user` | JSON `User`, or key absent     |
//!
//! The substrate is injected through [`KeyValueStore`] so production code can
//! use [`FileStore`] while tests use [`MemoryStore`]. [`RecordStore`] adds
//! JSON (de)serialization on top.
//!
//! There are no transactions: a read-modify-write by one process can be
//! overwritten by another (last write wins).

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known collection keys.
pub mod keys {
    /// Registered users.
    pub const USERS: &str = "users";

    /// Published resources, newest first.
    pub const RESOURCES: &str = "resources";

    /// The logged-in user, if any.
    pub const CURRENT_USER: &str = "current_user";
}

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the value would exceed the store quota.
    #[error("storage quota exceeded writing '{key}': need {required} bytes, {available} available")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Bytes the entry would occupy.
        required: usize,
        /// Bytes left under the quota.
        available: usize,
    },

    /// Key contains characters outside `[a-z0-9_]`.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    /// Filesystem failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A lock guarding in-memory state was poisoned.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Raw string key-value substrate.
///
/// Implementations must treat a missing key as `Ok(None)` and removing a
/// missing key as success.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the key is invalid, the quota would be
    /// exceeded, or the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Reject keys that could escape a namespace (path separators, dots, ...).
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_owned()))
    }
}

/// Check that an entry of `key.len() + value_len` bytes fits next to
/// `used_by_others` bytes under `quota`.
pub(crate) fn ensure_quota(
    quota: Option<usize>,
    used_by_others: usize,
    key: &str,
    value_len: usize,
) -> Result<(), StoreError> {
    let Some(quota) = quota else {
        return Ok(());
    };
    let required = key.len().saturating_add(value_len);
    let available = quota.saturating_sub(used_by_others);
    if required > available {
        return Err(StoreError::QuotaExceeded {
            key: key.to_owned(),
            required,
            available,
        });
    }
    Ok(())
}

/// Typed JSON layer over a [`KeyValueStore`].
///
/// Reads never fail: a missing key, a backend read error and a value that
/// does not parse as `T` all come back as `None`, and callers substitute
/// their seed or default. Writes and clears return errors.
#[derive(Debug, Clone, Default)]
pub struct RecordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Wrap a backend.
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Access the raw backend.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and parse the value stored at `key`.
    #[instrument(level = "debug", skip(self))]
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed record");
                None
            }
        }
    }

    /// Serialize `value` and store it at `key`, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if encoding fails or the backend rejects the
    /// write (for example [`StoreError::QuotaExceeded`]).
    #[instrument(level = "debug", skip(self, value))]
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.backend.set(key, &json)?;
        tracing::debug!(key, bytes = json.len(), "record written");
        Ok(())
    }

    /// Remove `key` entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }
}
