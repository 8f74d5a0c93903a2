//! Resource repository.

use chrono::Utc;
use tracing::instrument;

use designi_core::ResourceId;

use super::seed;
use crate::models::DesignResource;
use crate::store::{KeyValueStore, RecordStore, StoreError, keys};

/// Repository for the `resources` collection.
pub struct ResourceRepository<'a, S> {
    store: &'a RecordStore<S>,
}

impl<'a, S: KeyValueStore> ResourceRepository<'a, S> {
    /// Create a new resource repository.
    #[must_use]
    pub const fn new(store: &'a RecordStore<S>) -> Self {
        Self { store }
    }

    /// All resources in store order, or the seed catalog if absent.
    #[must_use]
    pub fn list(&self) -> Vec<DesignResource> {
        self.store
            .read(keys::RESOURCES)
            .unwrap_or_else(|| seed::resources(Utc::now()))
    }

    /// Insert at the head of the collection and persist it.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be written.
    #[instrument(skip(self, resource), fields(resource_id = %resource.id))]
    pub fn prepend(&self, resource: DesignResource) -> Result<(), StoreError> {
        let mut resources = self.list();
        resources.insert(0, resource);
        self.store.write(keys::RESOURCES, &resources)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be written.
    pub fn replace_all(&self, resources: &[DesignResource]) -> Result<(), StoreError> {
        self.store.write(keys::RESOURCES, resources)
    }

    /// Get a resource by id.
    #[must_use]
    pub fn get_by_id(&self, id: &ResourceId) -> Option<DesignResource> {
        self.list().into_iter().find(|r| &r.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_seed_and_prepend() {
        let store = RecordStore::new(MemoryStore::new());
        let repo = ResourceRepository::new(&store);
        assert_eq!(repo.list().len(), 3);

        let mut extra = repo.list().remove(1);
        extra.id = ResourceId::new("99");
        repo.prepend(extra).unwrap();

        let ids: Vec<_> = repo.list().into_iter().map(|r| r.id.into_inner()).collect();
        assert_eq!(ids, ["99", "1", "2", "3"]);
    }

    #[test]
    fn test_empty_collection_is_not_seeded() {
        let store = RecordStore::new(MemoryStore::new());
        let repo = ResourceRepository::new(&store);
        repo.replace_all(&[]).unwrap();
        assert!(repo.list().is_empty());
        assert!(repo.get_by_id(&ResourceId::new("1")).is_none());
    }

    #[test]
    fn test_get_by_id_from_seed() {
        let store = RecordStore::new(MemoryStore::new());
        let found = ResourceRepository::new(&store)
            .get_by_id(&ResourceId::new("2"))
            .unwrap();
        assert_eq!(found.title, "Flyer Evento Musical");
    }
}
