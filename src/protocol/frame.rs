//! JSON frames exchanged over the socket

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RelayError, RelayResult};
use crate::types::ServerEvent;

/// Names of the events clients may send
pub mod events {
    pub const CREATE_ROOM: &str = "create-room";
    pub const JOIN_ROOM: &str = "join-room";
    pub const SHARE_PROFILE: &str = "share-profile";
    pub const CHAT_MESSAGE: &str = "chat-message";
}

/// Client-to-server envelope
///
/// `ack` is the callback id for request/response events; the reply comes
/// back as an [`AckFrame`] carrying the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientFrame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack: Option<u64>,
}

impl ClientFrame {
    /// Build a frame (mostly for clients and tests)
    pub fn new(event: &str, data: Value, ack: Option<u64>) -> Self {
        Self {
            event: event.to_string(),
            data,
            ack,
        }
    }

    /// Parse a text frame
    pub fn decode(text: &str) -> RelayResult<Self> {
        serde_json::from_str(text).map_err(RelayError::InvalidFrame)
    }

    /// Deserialize `data` into the payload type of this event
    pub fn payload<T: DeserializeOwned>(&self) -> RelayResult<T> {
        T::deserialize(&self.data).map_err(|source| RelayError::InvalidPayload {
            event: self.event.clone(),
            source,
        })
    }
}

/// Reply to a client request, matched by `ack` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckFrame {
    pub ack: u64,
    pub data: Value,
}

/// Anything the server writes to a socket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundFrame {
    Ack(AckFrame),
    Event(ServerEvent),
}

impl OutboundFrame {
    /// The event carried by this frame, if it is not an ack
    #[cfg(test)]
    pub(crate) fn as_event(&self) -> Option<&ServerEvent> {
        match self {
            OutboundFrame::Event(event) => Some(event),
            OutboundFrame::Ack(_) => None,
        }
    }

    /// The ack carried by this frame, if any
    #[cfg(test)]
    pub(crate) fn as_ack(&self) -> Option<&AckFrame> {
        match self {
            OutboundFrame::Ack(ack) => Some(ack),
            OutboundFrame::Event(_) => None,
        }
    }
}

impl From<ServerEvent> for OutboundFrame {
    fn from(event: ServerEvent) -> Self {
        OutboundFrame::Event(event)
    }
}
