//! Entity store port
//!
//! The original back office kept every master-data collection in ad hoc
//! component state. This port replaces that with an explicit, injectable
//! store so the costing core and the use cases stay pure and testable.

use async_trait::async_trait;
use thiserror::Error;
use tourdesk_domain::EntryId;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    #[error("Store error: {0}")]
    Other(String),
}

/// Keyed store for one collection of entities.
///
/// Implementations are transient by design; nothing in tourdesk persists
/// across process restarts.
#[async_trait]
pub trait EntityStore<T: Send + Sync>: Send + Sync {
    /// All entries, in unspecified order.
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Fetch one entry by id.
    async fn get(&self, id: &EntryId) -> Result<T, StoreError>;

    /// Insert or replace an entry under `id`.
    async fn save(&self, id: EntryId, entity: T) -> Result<(), StoreError>;

    /// Remove an entry. Errors with [`StoreError::NotFound`] if absent.
    async fn remove(&self, id: &EntryId) -> Result<(), StoreError>;
}
