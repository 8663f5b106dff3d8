//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /ws`: Upgrade HTTP connection to WebSocket.
///
/// The receiver is taken before the upgrade completes so no message
/// published after the handshake is missed.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let message_rx = state.event_bus.subscribe();
    tracing::debug!(
        subscribers = state.event_bus.receiver_count(),
        "ws client connecting"
    );
    ws.on_upgrade(move |socket| run_connection(socket, message_rx))
}
