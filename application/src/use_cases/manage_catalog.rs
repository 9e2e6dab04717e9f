//! Manage Catalog use case
//!
//! Generic CRUD over one master-data collection. Validation is the minimal
//! presence check the intake forms always performed; anything stricter is a
//! deliberate non-goal.

use crate::ports::entity_store::{EntityStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tourdesk_domain::{CatalogEntry, DomainError, EntryId};
use tracing::debug;

/// Errors that can occur during catalog management
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case for CRUD over one catalog collection
pub struct ManageCatalogUseCase<T, S>
where
    T: CatalogEntry + Clone,
    S: EntityStore<T>,
{
    store: Arc<S>,
    _marker: std::marker::PhantomData<T>,
}

impl<T, S> ManageCatalogUseCase<T, S>
where
    T: CatalogEntry + Clone,
    S: EntityStore<T>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _marker: std::marker::PhantomData,
        }
    }

    /// Add or update an entry after validating it.
    pub async fn save(&self, entity: T) -> Result<(), CatalogError> {
        entity.validate()?;
        let id = entity.id().clone();
        debug!(entity = T::ENTITY, id = %id, "saving catalog entry");
        self.store.save(id, entity).await?;
        Ok(())
    }

    /// Fetch one entry by id.
    pub async fn get(&self, id: &EntryId) -> Result<T, CatalogError> {
        Ok(self.store.get(id).await?)
    }

    /// List all entries.
    pub async fn list(&self) -> Result<Vec<T>, CatalogError> {
        Ok(self.store.list().await?)
    }

    /// Remove an entry by id.
    pub async fn remove(&self, id: &EntryId) -> Result<(), CatalogError> {
        debug!(entity = T::ENTITY, id = %id, "removing catalog entry");
        Ok(self.store.remove(id).await?)
    }
}
