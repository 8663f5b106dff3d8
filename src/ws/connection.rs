//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! applying subscription commands and forwarding topic-filtered messages.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::{WsCommand, WsMessage, WsMessageType};
use super::subscription::SubscriptionManager;
use crate::domain::PublishedMessage;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads commands from the client and updates its subscriptions.
/// - Forwards messages from the [`broadcast::Receiver`] whose topic the
///   client subscribed to.
pub async fn run_connection(socket: WebSocket, mut message_rx: broadcast::Receiver<PublishedMessage>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut subs = SubscriptionManager::new();

    loop {
        tokio::select! {
            incoming = ws_rx.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        let reply = handle_text_message(&text, &mut subs);
                        if let Some(json) = encode(&reply)
                            && ws_tx.send(Message::text(json)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "ws read failed");
                        break;
                    }
                    _ => {}
                }
            }
            published = message_rx.recv() => {
                match published {
                    Ok(published) => {
                        if !subs.matches(&published.topic) {
                            continue;
                        }
                        if let Some(json) = encode(&WsMessage::event(&published))
                            && ws_tx.send(Message::text(json)).await.is_err() {
                                break;
                            }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

fn encode(msg: &WsMessage) -> Option<String> {
    serde_json::to_string(msg)
        .inspect_err(|e| tracing::error!(error = %e, "failed to encode ws frame"))
        .ok()
}

/// Applies one client frame to `subs` and builds the reply frame.
fn handle_text_message(text: &str, subs: &mut SubscriptionManager) -> WsMessage {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        return WsMessage::error(String::new(), 400, "malformed JSON");
    };

    if msg.msg_type != WsMessageType::Command {
        return WsMessage::error(msg.id, 400, "expected a command");
    }

    match serde_json::from_value::<WsCommand>(msg.payload) {
        Ok(WsCommand::Subscribe { topics }) => {
            let added = subs.subscribe(&topics);
            tracing::debug!(?topics, "ws client subscribed");
            WsMessage::response(
                msg.id,
                serde_json::json!({
                    "subscribed": added,
                    "count": subs.count(),
                    "wildcard": subs.is_subscribed_all(),
                }),
            )
        }
        Ok(WsCommand::Unsubscribe { topics }) => {
            subs.unsubscribe(&topics);
            tracing::debug!(?topics, "ws client unsubscribed");
            WsMessage::response(
                msg.id,
                serde_json::json!({
                    "unsubscribed": topics,
                    "remaining_count": subs.count(),
                    "wildcard": subs.is_subscribed_all(),
                }),
            )
        }
        Err(_) => WsMessage::error(msg.id, 404, "unknown command"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(payload: serde_json::Value) -> String {
        serde_json::json!({
            "id": "req-1",
            "type": "command",
            "timestamp": chrono::Utc::now(),
            "payload": payload,
        })
        .to_string()
    }

    #[test]
    fn subscribe_updates_filter() {
        let mut subs = SubscriptionManager::new();
        let reply = handle_text_message(
            &command(serde_json::json!({ "command": "subscribe", "topics": ["advert-confirmed"] })),
            &mut subs,
        );
        assert_eq!(reply.msg_type, WsMessageType::Response);
        assert_eq!(reply.id, "req-1");
        assert!(subs.matches("advert-confirmed"));
    }

    #[test]
    fn unsubscribe_updates_filter() {
        let mut subs = SubscriptionManager::new();
        subs.subscribe(&["advert-confirmed"]);
        let reply = handle_text_message(
            &command(serde_json::json!({ "command": "unsubscribe", "topics": ["advert-confirmed"] })),
            &mut subs,
        );
        assert_eq!(reply.msg_type, WsMessageType::Response);
        assert!(!subs.matches("advert-confirmed"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut subs = SubscriptionManager::new();
        let reply = handle_text_message("not json", &mut subs);
        assert_eq!(reply.msg_type, WsMessageType::Error);
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut subs = SubscriptionManager::new();
        let reply = handle_text_message(
            &command(serde_json::json!({ "command": "get_state" })),
            &mut subs,
        );
        assert_eq!(reply.msg_type, WsMessageType::Error);
        assert_eq!(subs.count(), 0);
    }
}
