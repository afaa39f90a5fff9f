//! Dashboard WebSocket sessions: connection ack plus live order events.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use serde::Serialize;
use tokio::select;
use tokio::sync::broadcast::error::RecvError;

use crate::api::routes::AppState;

/// One-time acknowledgment sent when a session connects.
#[derive(Debug, Serialize)]
struct ConnectedAck {
    status: &'static str,
}

// WebSocket handler - accepts upgrade and handles the connection
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

// Handle individual dashboard connection
async fn handle_socket(mut socket: WebSocket, state: AppState) {
    // Subscribe before the ack so nothing published afterwards is missed.
    let mut events = state.events.subscribe();

    let ack = ConnectedAck {
        status: "connected",
    };
    if let Ok(json) = serde_json::to_string(&ack) {
        if socket.send(Message::Text(json.into())).await.is_err() {
            return;
        }
    }
    tracing::debug!("dashboard session connected");

    loop {
        select! {
            result = events.recv() => {
                match result {
                    Ok(event) => {
                        if let Ok(json) = serde_json::to_string(&event) {
                            if socket.send(Message::Text(json.into())).await.is_err() {
                                // Client gone; the publisher is unaffected.
                                return;
                            }
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Slow session: missed events are dropped, the
                        // session stays connected for future ones.
                        tracing::warn!(skipped, "dashboard session lagged behind event stream");
                    }
                    Err(RecvError::Closed) => return,
                }
            }
            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Close(_))) => return,
                    Some(Err(_)) | None => return,
                    // Dashboards only listen; ignore text, binary, ping, pong.
                    _ => {}
                }
            }
        }
    }
}
