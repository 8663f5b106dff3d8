//! Advert store: identity assignment and state transitions over a
//! [`DocumentStore`].

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{AdvertId, AdvertRecord, AdvertSubmission, ConfirmOutcome, ValidationPolicy};
use crate::error::AdvertError;
use crate::persistence::DocumentStore;

/// Single source of truth for advert records and their transitions.
///
/// Stateless apart from its injected collaborators. Confirm is a plain
/// load, modify, save sequence: concurrent confirms of the same id are
/// last-writer-wins.
#[derive(Debug, Clone)]
pub struct AdvertStore {
    documents: Arc<dyn DocumentStore>,
    policy: ValidationPolicy,
}

impl AdvertStore {
    /// Creates a store over the given document store and submission policy.
    #[must_use]
    pub fn new(documents: Arc<dyn DocumentStore>, policy: ValidationPolicy) -> Self {
        Self { documents, policy }
    }

    /// Validates and persists a new `Pending` advert, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Invalid`] if the submission breaks the policy,
    /// or [`AdvertError::Transient`] if the document store fails.
    pub async fn create(&self, submission: AdvertSubmission) -> Result<AdvertId, AdvertError> {
        self.policy.check(&submission)?;

        let record = AdvertRecord::pending(AdvertId::generate(), submission, Utc::now());
        self.documents.save(&record).await.inspect_err(|e| {
            tracing::error!(advert_id = %record.id, error = %e, "failed to save new advert");
        })?;

        tracing::info!(advert_id = %record.id, title = %record.title, "advert created");
        Ok(record.id)
    }

    /// Applies a confirmation outcome to an existing advert.
    ///
    /// `Activate` sets the file path and status and re-saves; activating an
    /// already active advert overwrites it. `Reject` deletes a pending
    /// advert only: an active advert is never deleted by a rejection, the
    /// call fails with [`AdvertError::Invalid`] and the record is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::NotFound`] if no advert has this id,
    /// [`AdvertError::Invalid`] for a blank activation path or a rejection
    /// of an active advert, or [`AdvertError::Transient`] if the document
    /// store fails.
    pub async fn confirm(&self, id: &AdvertId, outcome: &ConfirmOutcome) -> Result<(), AdvertError> {
        outcome.validate()?;

        let mut record = self.load_existing(id).await?;

        match outcome {
            ConfirmOutcome::Activate { file_path } => {
                let reactivation = record.is_active();
                record.activate(file_path.clone());
                self.documents.save(&record).await.inspect_err(|e| {
                    tracing::error!(advert_id = %id, error = %e, "failed to save activated advert");
                })?;
                tracing::info!(advert_id = %id, file_path = %file_path, reactivation, "advert activated");
            }
            ConfirmOutcome::Reject => {
                if record.is_active() {
                    return Err(AdvertError::invalid(format!(
                        "advert {id} is already active and cannot be rejected"
                    )));
                }
                self.documents.delete(&record).await.inspect_err(|e| {
                    tracing::error!(advert_id = %id, error = %e, "failed to delete rejected advert");
                })?;
                tracing::info!(advert_id = %id, "advert rejected and deleted");
            }
        }

        Ok(())
    }

    /// Returns the advert stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::NotFound`] if absent, or
    /// [`AdvertError::Transient`] if the document store fails.
    pub async fn get_by_id(&self, id: &AdvertId) -> Result<AdvertRecord, AdvertError> {
        self.load_existing(id).await
    }

    /// Returns a snapshot of every stored advert, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the document store fails.
    pub async fn get_all(&self) -> Result<Vec<AdvertRecord>, AdvertError> {
        let records = self.documents.scan_all().await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to scan adverts");
        })?;
        tracing::debug!(count = records.len(), "adverts listed");
        Ok(records)
    }

    /// Reports whether the document store is ready.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the store cannot be queried.
    pub async fn check_health(&self) -> Result<bool, AdvertError> {
        self.documents.check_health().await
    }

    async fn load_existing(&self, id: &AdvertId) -> Result<AdvertRecord, AdvertError> {
        if id.is_blank() {
            return Err(AdvertError::NotFound(id.clone()));
        }
        self.documents
            .load(id)
            .await
            .inspect_err(|e| {
                tracing::error!(advert_id = %id, error = %e, "failed to load advert");
            })?
            .ok_or_else(|| AdvertError::NotFound(id.clone()))
    }
}
