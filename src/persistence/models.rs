//! Database row models.

use serde::{Deserialize, Serialize};

use crate::domain::AdvertRecord;
use crate::error::AdvertError;

/// A row of the `adverts` table: the key plus the full record as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvertDocument {
    /// Advert identifier (primary key).
    pub id: String,
    /// Serialized [`AdvertRecord`].
    pub document: serde_json::Value,
}

impl AdvertDocument {
    /// Encodes a record into its row form.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the record cannot be serialized.
    pub fn from_record(record: &AdvertRecord) -> Result<Self, AdvertError> {
        Ok(Self {
            id: record.id.to_string(),
            document: serde_json::to_value(record)?,
        })
    }

    /// Decodes the stored JSONB document.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the document is not a valid
    /// advert record.
    pub fn into_record(self) -> Result<AdvertRecord, AdvertError> {
        Ok(serde_json::from_value(self.document)?)
    }
}
