//! Room Relay
//!
//! A realtime room-presence and chat relay. Clients create or join a short
//! room code over a WebSocket, share a profile link, and chat; the server
//! fans every event out to the members of the room.
//!
//! # Modules
//!
//! - `types`: Rooms, members, request payloads and server events
//! - `registry`: In-memory room store with idle-room eviction
//! - `relay`: Per-connection handlers and the broadcast hub
//! - `protocol`: JSON frame envelopes and ack replies
//! - `validation`: Normalization and escaping of user input
//! - `api`: Axum router, WebSocket endpoint and diagnostics
//! - `config`: Settings from the environment
//! - `utils`: Timestamp helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use room_relay::api::http::create_router;
//! use room_relay::api::websocket::AppState;
//! use room_relay::{Config, Relay};
//!
//! #[tokio::main]
//! async fn main() -> room_relay::RelayResult<()> {
//!     let config = Config::from_env()?;
//!     let relay = Arc::new(Relay::default());
//!     let app = create_router(Arc::new(AppState::new(relay, config.clone())));
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod relay;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{RelayError, RelayResult};
pub use protocol::{AckFrame, ClientFrame, OutboundFrame};
pub use registry::RoomRegistry;
pub use relay::Relay;
pub use types::{
    ChatBroadcast, ChatMessageRequest, ConnectionId, JoinRoomReply, JoinRoomRequest, Member, Room,
    RoomId, ServerEvent, ShareProfileRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
