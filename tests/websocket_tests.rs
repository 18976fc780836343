//! End-to-end tests over a real WebSocket

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use room_relay::api::http::create_router;
use room_relay::api::websocket::AppState;
use room_relay::{Config, Relay};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn spawn_server() -> (SocketAddr, Arc<Relay>) {
    let relay = Arc::new(Relay::default());
    let state = Arc::new(AppState::new(Arc::clone(&relay), Config::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });
    (addr, relay)
}

async fn next_json(ws: &mut Client) -> Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("socket closed")
            .unwrap();
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

async fn send(ws: &mut Client, frame: Value) {
    ws.send(Message::Text(frame.to_string())).await.unwrap();
}

/// Connect and return the socket with its assigned connection id
async fn connect(addr: SocketAddr) -> (Client, String) {
    let (mut ws, _) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
    let welcome = next_json(&mut ws).await;
    assert_eq!(welcome["event"], "connected");
    let id = welcome["data"]["connectionId"].as_str().unwrap().to_string();
    (ws, id)
}

#[tokio::test]
async fn test_room_session_over_websocket() {
    let (addr, relay) = spawn_server().await;
    let (mut ada, ada_id) = connect(addr).await;
    let (mut bob, bob_id) = connect(addr).await;

    // Ada creates and joins
    send(&mut ada, json!({"event": "create-room", "ack": 1})).await;
    let created = next_json(&mut ada).await;
    assert_eq!(created["ack"], 1);
    let room_id = created["data"].as_str().unwrap().to_string();
    assert_eq!(room_id.len(), 6);

    send(
        &mut ada,
        json!({"event": "join-room", "data": {"roomId": room_id, "name": "Ada"}, "ack": 2}),
    )
    .await;
    let joined = next_json(&mut ada).await;
    assert_eq!(joined["ack"], 2);
    assert_eq!(joined["data"]["success"], true);

    // Bob joins with a lowercase code
    send(
        &mut bob,
        json!({
            "event": "join-room",
            "data": {"roomId": room_id.to_lowercase(), "name": "Bob"},
            "ack": 1
        }),
    )
    .await;
    let joined = next_json(&mut bob).await;
    assert_eq!(joined["data"]["success"], true);
    assert_eq!(joined["data"]["members"].as_array().unwrap().len(), 2);

    let announced = next_json(&mut ada).await;
    assert_eq!(announced["event"], "user-joined");
    assert_eq!(announced["data"]["connectionId"], bob_id.as_str());

    // Ada shares her profile
    send(
        &mut ada,
        json!({
            "event": "share-profile",
            "data": {"roomId": room_id, "profileLink": "https://ada.example"}
        }),
    )
    .await;
    for ws in [&mut ada, &mut bob] {
        let update = next_json(ws).await;
        assert_eq!(update["event"], "update-profile");
        assert_eq!(update["data"]["connectionId"], ada_id.as_str());
        assert_eq!(update["data"]["profileLink"], "https://ada.example");
    }

    // Ada chats
    send(
        &mut ada,
        json!({"event": "chat-message", "data": {"roomId": room_id, "text": "hi"}}),
    )
    .await;
    for ws in [&mut ada, &mut bob] {
        let line = next_json(ws).await;
        assert_eq!(line["event"], "chat-message");
        assert_eq!(line["data"]["name"], "Ada");
        assert_eq!(line["data"]["text"], "hi");
    }

    // Ada leaves
    ada.close(None).await.unwrap();
    let left = next_json(&mut bob).await;
    assert_eq!(left, json!({"event": "user-left", "data": ada_id}));

    let room = relay.room(&room_id).unwrap();
    assert_eq!(room.members.len(), 1);
    assert_eq!(room.members[0].connection_id, bob_id);
}

#[tokio::test]
async fn test_unknown_room_over_websocket() {
    let (addr, _relay) = spawn_server().await;
    let (mut ws, _) = connect(addr).await;

    send(
        &mut ws,
        json!({"event": "join-room", "data": {"roomId": "NOPE00", "name": "Ada"}, "ack": 9}),
    )
    .await;
    let reply = next_json(&mut ws).await;
    assert_eq!(
        reply,
        json!({"ack": 9, "data": {"success": false, "message": "Room not found"}})
    );
}

#[tokio::test]
async fn test_malformed_frame_gets_error_event() {
    let (addr, _relay) = spawn_server().await;
    let (mut ws, _) = connect(addr).await;

    ws.send(Message::Text("{oops".to_string())).await.unwrap();
    let reply = next_json(&mut ws).await;
    assert_eq!(reply["event"], "error");
    assert_eq!(reply["data"]["code"], "invalid_frame");
}
