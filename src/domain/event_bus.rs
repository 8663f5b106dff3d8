//! Broadcast channel for published notifications.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel and is the
//! in-process [`MessageSink`]: every publish becomes a [`PublishedMessage`]
//! fanned out to all WebSocket connections, which filter by topic.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::broadcast;

use super::{MessageSink, PublishedMessage};
use crate::error::AdvertError;

/// Broadcast bus for [`PublishedMessage`]s.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity
/// (default 10 000). When the ring buffer is full, the oldest messages are
/// dropped for lagging receivers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PublishedMessage>,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Sends a message to all subscribers.
    ///
    /// Returns the number of receivers that received the message.
    /// If there are no active receivers, the message is silently dropped.
    pub fn send(&self, message: PublishedMessage) -> usize {
        self.sender.send(message).unwrap_or(0)
    }

    /// Creates a new receiver that will receive all future messages.
    ///
    /// Each WebSocket connection should call this once on connect.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PublishedMessage> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl MessageSink for EventBus {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), AdvertError> {
        // A topic without subscribers is not a delivery failure.
        let delivered = self.send(PublishedMessage {
            topic: topic.to_string(),
            payload: payload.to_string(),
            published_at: Utc::now(),
        });
        tracing::debug!(topic, delivered, "message published");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_message(topic: &str) -> PublishedMessage {
        PublishedMessage {
            topic: topic.to_string(),
            payload: r#"{"Id":"a","Title":"Bike"}"#.to_string(),
            published_at: Utc::now(),
        }
    }

    #[test]
    fn send_without_receivers_returns_zero() {
        let bus = EventBus::new(100);
        assert_eq!(bus.send(make_message("advert-confirmed")), 0);
    }

    #[tokio::test]
    async fn publish_without_receivers_succeeds() {
        let bus = EventBus::new(100);
        tokio_test::assert_ok!(bus.publish("advert-confirmed", "{}").await);
    }

    #[tokio::test]
    async fn subscriber_receives_published_payload() {
        let bus = EventBus::new(100);
        let mut rx = bus.subscribe();

        tokio_test::assert_ok!(bus.publish("advert-confirmed", "payload").await);

        let Ok(message) = rx.recv().await else {
            panic!("expected to receive message");
        };
        assert_eq!(message.topic, "advert-confirmed");
        assert_eq!(message.payload, "payload");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_message() {
        let bus = EventBus::new(100);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let count = bus.send(make_message("t"));
        assert_eq!(count, 2);

        let Ok(m1) = rx1.recv().await else {
            panic!("rx1 failed");
        };
        let Ok(m2) = rx2.recv().await else {
            panic!("rx2 failed");
        };
        assert_eq!(m1, m2);
    }

    #[test]
    fn receiver_count_tracks_subscribers() {
        let bus = EventBus::new(100);
        assert_eq!(bus.receiver_count(), 0);

        let rx1 = bus.subscribe();
        assert_eq!(bus.receiver_count(), 1);

        let _rx2 = bus.subscribe();
        assert_eq!(bus.receiver_count(), 2);

        drop(rx1);
        assert_eq!(bus.receiver_count(), 1);
    }
}
