//! Advert records, submissions and confirmation outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AdvertId;
use crate::error::AdvertError;

/// Lifecycle status of an advert.
///
/// `Pending` → `Active` is the only persisted transition. `Deleted` names the
/// rejected outcome; rejected records are removed from the store rather than
/// archived, so it never appears on a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdvertStatus {
    /// Created, waiting for its asset upload to be confirmed.
    Pending,
    /// Confirmed with an uploaded asset. Terminal.
    Active,
    /// Rejected at confirmation. Terminal; the record no longer exists.
    Deleted,
}

/// Client-supplied advert content, before the store assigns identity.
///
/// Any `id` or `status` a client sends alongside these fields is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvertSubmission {
    /// Headline shown in listings. A missing title reads as blank.
    #[serde(default)]
    pub title: String,
    /// Free-form body text.
    #[serde(default)]
    pub description: String,
    /// Asking price; must be finite and non-negative.
    #[serde(default)]
    pub price: f64,
}

impl AdvertSubmission {
    /// Creates a submission with the given title and no description or price.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            price: 0.0,
        }
    }
}

/// Persisted advert document.
///
/// Invariant: `file_path` is `Some` if and only if `status` is
/// [`AdvertStatus::Active`]. Only [`AdvertRecord::pending`] and
/// [`AdvertRecord::activate`] change status, which keeps the pair in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertRecord {
    /// Store-assigned identifier (immutable).
    pub id: AdvertId,
    /// Headline copied from the submission.
    pub title: String,
    /// Body text copied from the submission.
    pub description: String,
    /// Price copied from the submission.
    pub price: f64,
    /// Current lifecycle status.
    pub status: AdvertStatus,
    /// UTC creation timestamp (immutable).
    pub creation_date_time: DateTime<Utc>,
    /// Uploaded asset reference, present only once active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl AdvertRecord {
    /// Builds a new `Pending` record from a submission.
    #[must_use]
    pub fn pending(id: AdvertId, submission: AdvertSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: submission.title,
            description: submission.description,
            price: submission.price,
            status: AdvertStatus::Pending,
            creation_date_time: created_at,
            file_path: None,
        }
    }

    /// Moves the record to `Active` with the given asset path.
    ///
    /// Re-activating an already active record overwrites the path.
    pub fn activate(&mut self, file_path: String) {
        self.file_path = Some(file_path);
        self.status = AdvertStatus::Active;
    }

    /// Returns `true` if the record is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AdvertStatus::Active
    }
}

/// Outcome supplied by the caller when confirming an advert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The asset was uploaded; activate the advert with this path.
    Activate {
        /// Reference to the uploaded asset.
        file_path: String,
    },
    /// Discard the advert.
    Reject,
}

impl ConfirmOutcome {
    /// Builds an [`ConfirmOutcome::Activate`] outcome.
    #[must_use]
    pub fn activate(file_path: impl Into<String>) -> Self {
        Self::Activate {
            file_path: file_path.into(),
        }
    }

    /// Maps a requested target status plus optional path onto an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Invalid`] for a `Pending` target or an
    /// activation without a usable file path.
    pub fn from_status(status: AdvertStatus, file_path: Option<String>) -> Result<Self, AdvertError> {
        let outcome = match status {
            AdvertStatus::Active => Self::Activate {
                file_path: file_path.unwrap_or_default(),
            },
            AdvertStatus::Deleted => Self::Reject,
            AdvertStatus::Pending => {
                return Err(AdvertError::invalid(
                    "confirmation status must be Active or Deleted",
                ));
            }
        };
        outcome.validate()?;
        Ok(outcome)
    }

    /// Checks that an activation carries a non-blank file path.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Invalid`] when the path is blank.
    pub fn validate(&self) -> Result<(), AdvertError> {
        match self {
            Self::Activate { file_path } if file_path.trim().is_empty() => Err(
                AdvertError::invalid("filePath is required to activate an advert"),
            ),
            _ => Ok(()),
        }
    }

    /// Returns `true` for the activation outcome.
    #[must_use]
    pub const fn is_activation(&self) -> bool {
        matches!(self, Self::Activate { .. })
    }
}
