//! Publish-once message sink collaborator.

use async_trait::async_trait;

use crate::error::AdvertError;

/// Transport that delivers a serialized payload to a topic.
///
/// Implementations make exactly one delivery attempt per call and report
/// failure as [`AdvertError::Transient`]. Delivery to subscribers is
/// at-least-once at best; nothing here deduplicates.
#[async_trait]
pub trait MessageSink: Send + Sync + std::fmt::Debug {
    /// Publishes `payload` to `topic`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the transport rejects or cannot
    /// reach the topic.
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), AdvertError>;
}
