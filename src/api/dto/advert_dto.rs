//! Advert DTOs for create and confirm operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AdvertId, AdvertStatus, ConfirmOutcome};
use crate::error::AdvertError;

/// Response body for `POST /adverts/v1/create` (201 Created).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAdvertResponse {
    /// Identifier assigned to the new advert.
    pub id: AdvertId,
}

/// Request body for `PUT /adverts/v1/confirm`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmAdvertRequest {
    /// Advert to confirm.
    pub id: String,
    /// Uploaded asset path; required when `status` is `Active`.
    #[serde(default)]
    pub file_path: Option<String>,
    /// Target status: `Active` to activate, `Deleted` to reject.
    pub status: AdvertStatus,
}

impl ConfirmAdvertRequest {
    /// Splits the request into the target id and the confirmation outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Invalid`] if the status/path pair does not
    /// describe a valid outcome.
    pub fn into_parts(self) -> Result<(AdvertId, ConfirmOutcome), AdvertError> {
        let outcome = ConfirmOutcome::from_status(self.status, self.file_path)?;
        Ok((AdvertId::from(self.id), outcome))
    }
}
