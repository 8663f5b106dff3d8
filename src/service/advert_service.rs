//! Advert service: the caller-facing surface of the lifecycle core.

use std::sync::Arc;

use crate::domain::{
    AdvertId, AdvertRecord, AdvertSubmission, ConfirmOutcome, MessageSink, ValidationPolicy,
};
use crate::error::AdvertError;
use crate::persistence::DocumentStore;

use super::{AdvertStore, ConfirmationNotifier};

/// Orchestration layer for all advert operations.
///
/// Stateless coordinator over an [`AdvertStore`] and a
/// [`ConfirmationNotifier`]. Confirmation follows the pattern: apply the
/// outcome in the store → on activation, read the record back → publish one
/// notification → return. A failed publish is reported but the store
/// transition is kept.
#[derive(Debug, Clone)]
pub struct AdvertService {
    store: AdvertStore,
    notifier: ConfirmationNotifier,
}

impl AdvertService {
    /// Creates a new `AdvertService` from its two components.
    #[must_use]
    pub fn new(store: AdvertStore, notifier: ConfirmationNotifier) -> Self {
        Self { store, notifier }
    }

    /// Wires a service directly from its collaborators.
    #[must_use]
    pub fn with_collaborators(
        documents: Arc<dyn DocumentStore>,
        sink: Arc<dyn MessageSink>,
        policy: ValidationPolicy,
        topic: impl Into<String>,
    ) -> Self {
        Self::new(
            AdvertStore::new(documents, policy),
            ConfirmationNotifier::new(sink, topic),
        )
    }

    /// Creates a new `Pending` advert.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Invalid`] for a malformed submission or
    /// [`AdvertError::Transient`] if the store fails.
    pub async fn create(&self, submission: AdvertSubmission) -> Result<AdvertId, AdvertError> {
        self.store.create(submission).await
    }

    /// Confirms an advert and, on activation, notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::NotFound`] if the advert does not exist,
    /// [`AdvertError::Invalid`] for an unusable outcome, or
    /// [`AdvertError::Transient`] if the store or the notification fails.
    /// A notification failure leaves the advert `Active`.
    pub async fn confirm(&self, id: &AdvertId, outcome: ConfirmOutcome) -> Result<(), AdvertError> {
        self.store.confirm(id, &outcome).await?;

        if outcome.is_activation() {
            let record = self.store.get_by_id(id).await?;
            self.notifier
                .notify_activated(&record.id, &record.title)
                .await?;
        }

        Ok(())
    }

    /// Returns a single advert.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::NotFound`] if absent or
    /// [`AdvertError::Transient`] if the store fails.
    pub async fn get_by_id(&self, id: &AdvertId) -> Result<AdvertRecord, AdvertError> {
        self.store.get_by_id(id).await
    }

    /// Returns every stored advert.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store fails.
    pub async fn get_all(&self) -> Result<Vec<AdvertRecord>, AdvertError> {
        self.store.get_all().await
    }

    /// Reports whether the backing store is ready.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store cannot be queried.
    pub async fn check_health(&self) -> Result<bool, AdvertError> {
        self.store.check_health().await
    }
}
