//! Events the relay pushes to connected clients

use serde::{Deserialize, Serialize};

use super::{ConnectionId, Member};

/// Server-to-client events
///
/// Serialized as `{"event": "<kebab-name>", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Sent once when the socket is accepted
    Connected(Welcome),

    /// Someone else joined a room the recipient is in
    UserJoined(Member),

    /// A member changed their profile link
    UpdateProfile(Member),

    /// A member's connection went away
    UserLeft(ConnectionId),

    /// Chat line fanned out to the whole room
    ChatMessage(ChatBroadcast),

    /// Protocol-level problem with a frame from this connection
    Error(ErrorNotice),
}

impl ServerEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Connected(_) => "connected",
            ServerEvent::UserJoined(_) => "user-joined",
            ServerEvent::UpdateProfile(_) => "update-profile",
            ServerEvent::UserLeft(_) => "user-left",
            ServerEvent::ChatMessage(_) => "chat-message",
            ServerEvent::Error(_) => "error",
        }
    }
}

/// Payload of the `connected` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Welcome {
    pub connection_id: ConnectionId,
}

/// Payload of the `chat-message` broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBroadcast {
    pub connection_id: ConnectionId,
    pub name: String,
    pub text: String,
    /// Server-local `HH:MM` at broadcast time
    pub server_timestamp: String,
}

/// Payload of the `error` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_left_serialization() {
        let json = serde_json::to_value(ServerEvent::UserLeft("conn-9".to_string())).unwrap();
        assert_eq!(json, json!({"event": "user-left", "data": "conn-9"}));
    }

    #[test]
    fn test_chat_message_serialization() {
        let event = ServerEvent::ChatMessage(ChatBroadcast {
            connection_id: "conn-1".to_string(),
            name: "Ada".to_string(),
            text: "hello".to_string(),
            server_timestamp: "09:05".to_string(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "chat-message");
        assert_eq!(json["data"]["serverTimestamp"], "09:05");
        assert_eq!(json["data"]["connectionId"], "conn-1");
    }

    #[test]
    fn test_event_names_match_wire_tags() {
        let event = ServerEvent::UpdateProfile(Member::new("a".to_string(), "Ada".to_string()));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], event.name());
    }
}
