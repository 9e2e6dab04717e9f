//! In-memory entity store.
//!
//! The whole back office runs on transient state: collections live in
//! process memory and vanish on restart. This adapter makes that explicit
//! behind the [`EntityStore`] port instead of scattering it through UI
//! state.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tourdesk_application::ports::entity_store::{EntityStore, StoreError};
use tourdesk_domain::EntryId;

/// HashMap-backed store for one entity collection.
pub struct InMemoryStore<T> {
    entries: RwLock<HashMap<EntryId, T>>,
}

impl<T: Clone + Send + Sync> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store pre-populated from `(id, entity)` pairs.
    pub fn seeded<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EntryId, T)>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T: Clone + Send + Sync> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> EntityStore<T> for InMemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &EntryId) -> Result<T, StoreError> {
        self.entries
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn save(&self, id: EntryId, entity: T) -> Result<(), StoreError> {
        self.entries.write().await.insert(id, entity);
        Ok(())
    }

    async fn remove(&self, id: &EntryId) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourdesk_domain::Amenity;

    #[tokio::test]
    async fn test_save_get_remove_roundtrip() {
        let store = InMemoryStore::new();
        let id = EntryId::new("amn-001");
        store
            .save(id.clone(), Amenity::new("amn-001", "Pool"))
            .await
            .unwrap();

        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.name, "Pool");

        store.remove(&id).await.unwrap();
        assert!(matches!(
            store.get(&id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_save_replaces() {
        let store = InMemoryStore::new();
        let id = EntryId::new("amn-001");
        store
            .save(id.clone(), Amenity::new("amn-001", "Pool"))
            .await
            .unwrap();
        store
            .save(id.clone(), Amenity::new("amn-001", "Heated Pool"))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&id).await.unwrap().name, "Heated Pool");
    }

    #[tokio::test]
    async fn test_seeded() {
        let store = InMemoryStore::seeded(vec![
            (EntryId::new("amn-001"), Amenity::new("amn-001", "Pool")),
            (EntryId::new("amn-002"), Amenity::new("amn-002", "Spa")),
        ]);
        assert_eq!(store.len().await, 2);
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_remove_missing() {
        let store: InMemoryStore<Amenity> = InMemoryStore::new();
        assert!(matches!(
            store.remove(&EntryId::new("amn-404")).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
