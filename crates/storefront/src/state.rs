//! Application state shared across commands.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{AuthService, CatalogService, SessionManager};
use crate::store::{FileStore, KeyValueStore, RecordStore, StoreError};

/// Application state.
///
/// Cheaply cloneable via `Arc`. Services borrow the store, so they are
/// built on demand rather than held here.
#[derive(Debug)]
pub struct AppState<S> {
    inner: Arc<RecordStore<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Create a new application state over a store backend.
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self {
            inner: Arc::new(RecordStore::new(backend)),
        }
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore<S> {
        &self.inner
    }

    /// Authentication service over this state's store.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_, S> {
        AuthService::new(&self.inner)
    }

    /// Catalog service over this state's store.
    #[must_use]
    pub fn catalog(&self) -> CatalogService<'_, S> {
        CatalogService::new(&self.inner)
    }

    /// Session manager over this state's store.
    #[must_use]
    pub fn session(&self) -> SessionManager<'_, S> {
        SessionManager::new(&self.inner)
    }
}

impl AppState<FileStore> {
    /// Open the file-backed store named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the data directory cannot be created.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StoreError> {
        Ok(Self::new(config.store.open()?))
    }
}
