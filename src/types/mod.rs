//! Data types for the room relay
//!
//! Rooms and their members, the payloads clients send, and the events the
//! relay fans out.

mod event;
mod member;
mod payload;
mod room;

pub use event::{ChatBroadcast, ErrorNotice, ServerEvent, Welcome};
pub use member::Member;
pub use payload::{ChatMessageRequest, JoinRoomReply, JoinRoomRequest, ShareProfileRequest};
pub use room::Room;

/// Opaque per-connection identifier assigned by the hub
pub type ConnectionId = String;

/// Short uppercase room code
pub type RoomId = String;

