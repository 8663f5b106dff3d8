//! Confirmation notifier: one activation message per confirmed advert.

use std::sync::Arc;

use crate::domain::{AdvertConfirmedMessage, AdvertId, MessageSink};
use crate::error::AdvertError;

/// Publishes [`AdvertConfirmedMessage`]s to the configured topic.
#[derive(Debug, Clone)]
pub struct ConfirmationNotifier {
    sink: Arc<dyn MessageSink>,
    topic: String,
}

impl ConfirmationNotifier {
    /// Creates a notifier publishing to `topic` through `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn MessageSink>, topic: impl Into<String>) -> Self {
        Self {
            sink,
            topic: topic.into(),
        }
    }

    /// Returns the topic activation messages are published to.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Publishes a single activation message for the given advert.
    ///
    /// Makes exactly one publish attempt; there is no inline retry.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if the message cannot be
    /// serialized or the sink rejects it.
    pub async fn notify_activated(&self, id: &AdvertId, title: &str) -> Result<(), AdvertError> {
        let message = AdvertConfirmedMessage {
            id: id.clone(),
            title: title.to_string(),
        };
        let payload = message.to_json()?;

        self.sink
            .publish(&self.topic, &payload)
            .await
            .inspect_err(|e| {
                tracing::warn!(advert_id = %id, topic = %self.topic, error = %e, "advert is active but the activation notification failed");
            })?;

        tracing::info!(advert_id = %id, topic = %self.topic, "activation notification published");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::EventBus;

    #[tokio::test]
    async fn publishes_id_and_title_to_topic() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let notifier = ConfirmationNotifier::new(Arc::new(bus), "advert-confirmed");

        let id = AdvertId::from("x-1");
        tokio_test::assert_ok!(notifier.notify_activated(&id, "Bike").await);

        let Ok(published) = rx.recv().await else {
            panic!("expected a published message");
        };
        assert_eq!(published.topic, "advert-confirmed");
        let Ok(message) = serde_json::from_str::<AdvertConfirmedMessage>(&published.payload)
        else {
            panic!("payload is not a confirmation message");
        };
        assert_eq!(message.id, id);
        assert_eq!(message.title, "Bike");
    }

    #[test]
    fn exposes_topic() {
        let notifier = ConfirmationNotifier::new(Arc::new(EventBus::new(1)), "t");
        assert_eq!(notifier.topic(), "t");
    }
}
