//! Notification payloads emitted when adverts change state.
//!
//! [`AdvertConfirmedMessage`] is the body published to the confirmation
//! topic. Its keys are PascalCase (`Id`, `Title`) so existing subscribers of
//! the confirmation topic keep decoding it unchanged. [`PublishedMessage`] is
//! what the in-process [`super::EventBus`] carries for any topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdvertId;

/// Event announcing that an advert became active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvertConfirmedMessage {
    /// Identifier of the activated advert.
    pub id: AdvertId,
    /// Title of the activated advert, read back from the store.
    pub title: String,
}

impl AdvertConfirmedMessage {
    /// Serializes the message to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A payload published to a topic, as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedMessage {
    /// Topic the payload was published to.
    pub topic: String,
    /// Serialized payload exactly as handed to the sink.
    pub payload: String,
    /// Server-side publication timestamp.
    pub published_at: DateTime<Utc>,
}

impl PublishedMessage {
    /// Parses the payload as JSON, falling back to a JSON string.
    #[must_use]
    pub fn payload_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.payload)
            .unwrap_or_else(|_| serde_json::Value::String(self.payload.clone()))
    }
}
