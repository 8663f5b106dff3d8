//! In-memory document store.
//!
//! [`InMemoryDocumentStore`] keeps advert records in a `HashMap` behind a
//! [`tokio::sync::RwLock`]. Records are cloned in and out, so callers never
//! hold references into the map across await points.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::domain::{AdvertId, AdvertRecord};
use crate::error::AdvertError;

/// Process-local [`DocumentStore`].
///
/// # Concurrency
///
/// - Loads and scans share the read lock.
/// - Saves and deletes take the write lock for the duration of one map
///   operation; there is no cross-call transaction.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    records: RwLock<HashMap<AdvertId, AdvertRecord>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self, id: &AdvertId) -> Result<Option<AdvertRecord>, AdvertError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn save(&self, record: &AdvertRecord) -> Result<(), AdvertError> {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, record: &AdvertRecord) -> Result<(), AdvertError> {
        self.records.write().await.remove(&record.id);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<AdvertRecord>, AdvertError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn check_health(&self) -> Result<bool, AdvertError> {
        Ok(true)
    }
}
