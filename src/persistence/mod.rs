//! Persistence layer: the document store collaborator and its bindings.
//!
//! [`DocumentStore`] is the key-value contract the advert lifecycle service
//! depends on. Two bindings ship with the crate: [`InMemoryDocumentStore`]
//! for tests and single-process deployments, and [`PostgresDocumentStore`]
//! which keeps each advert as a JSONB document via `sqlx::PgPool`.

pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

use async_trait::async_trait;

use crate::domain::{AdvertId, AdvertRecord};
use crate::error::AdvertError;

/// Key-addressed advert document store.
///
/// Keyed by [`AdvertId`]. `save` has overwrite semantics; `scan_all` is an
/// unindexed full read. Every error is reported as
/// [`AdvertError::Transient`].
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Loads the record stored under `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store is unreachable.
    async fn load(&self, id: &AdvertId) -> Result<Option<AdvertRecord>, AdvertError>;

    /// Inserts or replaces the record stored under `record.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store is unreachable.
    async fn save(&self, record: &AdvertRecord) -> Result<(), AdvertError>;

    /// Removes the record stored under `record.id`. Missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store is unreachable.
    async fn delete(&self, record: &AdvertRecord) -> Result<(), AdvertError>;

    /// Returns every stored record, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store is unreachable.
    async fn scan_all(&self) -> Result<Vec<AdvertRecord>, AdvertError>;

    /// Reports whether the backing collection exists and accepts requests.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store cannot be queried.
    async fn check_health(&self) -> Result<bool, AdvertError>;
}
