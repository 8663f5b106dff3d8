//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` streams published notifications to
//! clients, filtered by the topics each client subscribed to.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
