//! WebSocket connection handler

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};

use super::state::AppState;
use crate::relay::FrameReceiver;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (connection_id, rx) = state.relay.connect();
    log::info!("A user connected: {}", connection_id);

    let (sink, mut stream) = socket.split();
    let writer = tokio::spawn(write_frames(sink, rx));

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => state.relay.handle_text(&connection_id, &text),
            Ok(Message::Close(_)) => break,
            Ok(_) => {} // Binary and control frames carry nothing for us
            Err(err) => {
                log::debug!("Socket error on {}: {}", connection_id, err);
                break;
            }
        }
    }

    // Dropping the hub's sender ends the writer
    state.relay.disconnect(&connection_id);
    if let Err(err) = writer.await {
        log::warn!("Writer task for {} failed: {}", connection_id, err);
    }
}

/// Forward queued frames to the socket until the queue closes or the client goes away
async fn write_frames(
    mut sink: futures::stream::SplitSink<WebSocket, Message>,
    mut rx: FrameReceiver,
) {
    while let Some(frame) = rx.recv().await {
        let json = match serde_json::to_string(&frame) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Dropping unencodable frame: {}", err);
                continue;
            }
        };
        if sink.send(Message::Text(json)).await.is_err() {
            return; // Client disconnected
        }
    }
    let _ = sink.close().await;
}
