//! Opaque advert identifier.
//!
//! [`AdvertId`] is a newtype over the textual identifier so that advert ids
//! cannot be confused with topics, file paths or titles. Fresh ids are UUID v4
//! strings; ids supplied by callers for lookups are accepted verbatim, so an
//! unknown or malformed id simply resolves to "not found".

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for an advert record.
///
/// Generated once by the store at creation time and immutable thereafter.
/// Used as the document key in every [`crate::persistence::DocumentStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AdvertId(String);

impl AdvertId {
    /// Generates a fresh identifier (UUID v4 text).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AdvertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AdvertId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AdvertId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<AdvertId> for String {
    fn from(id: AdvertId) -> Self {
        id.0
    }
}

impl AsRef<str> for AdvertId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
