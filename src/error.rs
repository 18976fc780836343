//! Error types for the relay

use thiserror::Error;

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Everything that can go wrong between a frame arriving and a reply leaving
#[derive(Debug, Error)]
pub enum RelayError {
    /// The room id is not in the registry
    #[error("Room not found")]
    RoomNotFound(String),

    /// A join was attempted with an unusable display name
    #[error("{0}")]
    InvalidName(&'static str),

    /// The frame named an event this relay does not handle
    #[error("Unknown event '{0}'")]
    UnknownEvent(String),

    /// The frame's `data` did not match the payload shape of its event
    #[error("Invalid payload for '{event}': {source}")]
    InvalidPayload {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    /// The text frame was not a JSON event envelope
    #[error("Malformed frame: {0}")]
    InvalidFrame(#[source] serde_json::Error),

    /// A reply could not be encoded as JSON
    #[error("Failed to encode reply: {0}")]
    Encode(#[source] serde_json::Error),

    /// An environment variable held a value that could not be parsed
    #[error("Invalid value '{value}' for {key}")]
    Config { key: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Short machine-readable code sent to clients in `error` events
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::RoomNotFound(_) => "room_not_found",
            RelayError::InvalidName(_) => "invalid_name",
            RelayError::UnknownEvent(_) => "unknown_event",
            RelayError::InvalidPayload { .. } => "invalid_payload",
            RelayError::InvalidFrame(_) => "invalid_frame",
            RelayError::Encode(_) => "encode",
            RelayError::Config { .. } => "config",
            RelayError::Io(_) => "io",
        }
    }
}
