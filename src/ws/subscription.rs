//! Per-connection subscription manager.
//!
//! Tracks which topics a WebSocket client is subscribed to and provides
//! server-side message filtering.

use std::collections::HashSet;

/// Topic name that subscribes a client to every topic.
pub const WILDCARD: &str = "*";

/// Manages the set of topic subscriptions for a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed topics. Ignored while `subscribe_all` is set.
    topics: HashSet<String>,
    /// Whether the client subscribed with the wildcard.
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds topics to the subscription set. [`WILDCARD`] enables all topics.
    ///
    /// Returns the topics that were newly added.
    pub fn subscribe<S: AsRef<str>>(&mut self, topics: &[S]) -> Vec<String> {
        let mut added = Vec::new();
        for topic in topics.iter().map(AsRef::as_ref) {
            let topic = topic.trim();
            if topic == WILDCARD {
                self.subscribe_all = true;
            } else if !topic.is_empty() && self.topics.insert(topic.to_string()) {
                added.push(topic.to_string());
            }
        }
        added
    }

    /// Removes topics from the subscription set. [`WILDCARD`] clears the
    /// wildcard but keeps explicit topics.
    pub fn unsubscribe<S: AsRef<str>>(&mut self, topics: &[S]) {
        for topic in topics.iter().map(AsRef::as_ref) {
            let topic = topic.trim();
            if topic == WILDCARD {
                self.subscribe_all = false;
            } else {
                self.topics.remove(topic);
            }
        }
    }

    /// Returns `true` if messages on `topic` should reach this client.
    #[must_use]
    pub fn matches(&self, topic: &str) -> bool {
        self.subscribe_all || self.topics.contains(topic)
    }

    /// Returns the number of explicitly subscribed topics.
    #[must_use]
    pub fn count(&self) -> usize {
        self.topics.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}
