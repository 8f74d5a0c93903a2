//! Resource catalog service.

use tracing::instrument;

use designi_core::ResourceId;

use crate::db::ResourceRepository;
use crate::models::DesignResource;
use crate::search;
use crate::store::{KeyValueStore, RecordStore, StoreError};

/// Read and publish design resources.
pub struct CatalogService<'a, S> {
    resources: ResourceRepository<'a, S>,
}

impl<'a, S: KeyValueStore> CatalogService<'a, S> {
    /// Create a catalog service over `store`.
    #[must_use]
    pub const fn new(store: &'a RecordStore<S>) -> Self {
        Self {
            resources: ResourceRepository::new(store),
        }
    }

    /// All resources, newest first. Falls back to the seed catalog.
    #[must_use]
    pub fn list_resources(&self) -> Vec<DesignResource> {
        self.resources.list()
    }

    /// Insert `resource` at the head of the catalog.
    ///
    /// Ids are not deduplicated and the author is not checked.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the catalog cannot be written, for example
    /// when the store quota is exhausted by a large thumbnail.
    #[instrument(skip(self, resource), fields(resource_id = %resource.id, title = %resource.title))]
    pub fn publish(&self, resource: DesignResource) -> Result<(), StoreError> {
        self.resources.prepend(resource)?;
        tracing::info!("resource published");
        Ok(())
    }

    /// Look up a resource by id.
    #[must_use]
    pub fn get(&self, id: &ResourceId) -> Option<DesignResource> {
        self.resources.get_by_id(id)
    }

    /// Resources whose title or tags contain `term`, case-insensitively.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<DesignResource> {
        search::filter_resources(self.list_resources(), term)
    }
}
