//! Event Relay - per-connection handlers over the shared registry
//!
//! Every handler runs to completion while holding one lock around the
//! registry and the connection hub, so handlers are atomic with respect to
//! each other and broadcasts are queued in the order handlers ran.
//!
//! Identity is the connection id alone: any connection that is a member of
//! a room may act in it.

mod chat_message;
mod create_room;
mod disconnect;
mod hub;
mod join_room;
mod share_profile;
pub mod sweeper;

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{RelayError, RelayResult};
use crate::protocol::{events, AckFrame, ClientFrame, OutboundFrame};
use crate::registry::RoomRegistry;
use crate::types::{
    ChatMessageRequest, ConnectionId, ErrorNotice, JoinRoomReply, JoinRoomRequest, Room, RoomId,
    ServerEvent, ShareProfileRequest, Welcome,
};

pub use hub::{ConnectionHub, FrameReceiver, FrameSender};

/// State guarded by the relay lock
pub struct RelayCore {
    pub(crate) registry: RoomRegistry,
    pub(crate) hub: ConnectionHub,
}

/// The relay: registry plus broadcast hub behind a single lock
pub struct Relay {
    core: Mutex<RelayCore>,
}

impl Relay {
    pub fn new(registry: RoomRegistry) -> Self {
        Self {
            core: Mutex::new(RelayCore {
                registry,
                hub: ConnectionHub::new(),
            }),
        }
    }

    /// Accept a new connection under a fresh id
    pub fn connect(&self) -> (ConnectionId, FrameReceiver) {
        let connection_id = Uuid::new_v4().to_string();
        let rx = self.connect_as(connection_id.clone());
        (connection_id, rx)
    }

    /// Accept a new connection under a caller-chosen id
    ///
    /// The first frame queued is the `connected` welcome.
    pub fn connect_as(&self, connection_id: ConnectionId) -> FrameReceiver {
        let mut core = self.core.lock();
        let rx = core.hub.register(connection_id.clone());
        let welcome = ServerEvent::Connected(Welcome {
            connection_id: connection_id.clone(),
        });
        core.hub.send_to(&connection_id, welcome.into());
        rx
    }

    pub fn create_room(&self, connection_id: &str) -> RoomId {
        create_room::handle(&mut self.core.lock(), connection_id)
    }

    pub fn join_room(&self, connection_id: &str, request: JoinRoomRequest) -> JoinRoomReply {
        join_room::handle(&mut self.core.lock(), connection_id, request)
    }

    pub fn share_profile(&self, connection_id: &str, request: ShareProfileRequest) -> bool {
        share_profile::handle(&mut self.core.lock(), connection_id, request)
    }

    pub fn chat_message(&self, connection_id: &str, request: ChatMessageRequest) -> bool {
        chat_message::handle(&mut self.core.lock(), connection_id, request)
    }

    /// Remove the connection everywhere, returning the rooms it left
    pub fn disconnect(&self, connection_id: &str) -> Vec<RoomId> {
        let rooms = disconnect::handle(&mut self.core.lock(), connection_id);
        log::info!("User disconnected: {} (left {} rooms)", connection_id, rooms.len());
        rooms
    }

    /// Dispatch one decoded frame, queueing the ack reply if one was asked for
    pub fn handle_frame(&self, connection_id: &str, frame: ClientFrame) -> RelayResult<()> {
        match frame.event.as_str() {
            events::CREATE_ROOM => {
                let mut core = self.core.lock();
                let room_id = create_room::handle(&mut core, connection_id);
                reply(&core, connection_id, frame.ack, &room_id)
            }
            events::JOIN_ROOM => {
                let request = frame.payload()?;
                let mut core = self.core.lock();
                let outcome = join_room::handle(&mut core, connection_id, request);
                reply(&core, connection_id, frame.ack, &outcome)
            }
            events::SHARE_PROFILE => {
                let request = frame.payload()?;
                share_profile::handle(&mut self.core.lock(), connection_id, request);
                Ok(())
            }
            events::CHAT_MESSAGE => {
                let request = frame.payload()?;
                chat_message::handle(&mut self.core.lock(), connection_id, request);
                Ok(())
            }
            other => Err(RelayError::UnknownEvent(other.to_string())),
        }
    }

    /// Decode and dispatch a text frame; failures go back to the sender as `error` events
    pub fn handle_text(&self, connection_id: &str, text: &str) {
        let result =
            ClientFrame::decode(text).and_then(|frame| self.handle_frame(connection_id, frame));
        if let Err(err) = result {
            log::warn!("Frame from {} dropped: {}", connection_id, err);
            self.notify_error(connection_id, &err);
        }
    }

    /// Send an `error` event to one connection
    pub fn notify_error(&self, connection_id: &str, err: &RelayError) {
        let notice = ServerEvent::Error(ErrorNotice {
            code: err.code().to_string(),
            message: err.to_string(),
        });
        self.core.lock().hub.send_to(connection_id, notice.into());
    }

    /// Evict rooms idle for `ttl` and forget their broadcast groups
    pub fn evict_idle_rooms(&self, now: Instant, ttl: Duration) -> Vec<RoomId> {
        let mut core = self.core.lock();
        let evicted = core.registry.evict_idle(now, ttl);
        for room_id in &evicted {
            core.hub.drop_group(room_id);
        }
        evicted
    }

    /// Copy of one room
    pub fn room(&self, room_id: &str) -> Option<Room> {
        self.core.lock().registry.get_room(room_id).cloned()
    }

    /// Copy of the whole registry, for diagnostics
    pub fn snapshot(&self) -> BTreeMap<RoomId, Room> {
        self.core.lock().registry.snapshot()
    }

    pub fn connection_count(&self) -> usize {
        self.core.lock().hub.connection_count()
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new(RoomRegistry::new())
    }
}

/// Queue an ack for the caller when the frame carried a callback id
fn reply<T: Serialize>(
    core: &RelayCore,
    connection_id: &str,
    ack: Option<u64>,
    data: &T,
) -> RelayResult<()> {
    let Some(ack) = ack else {
        return Ok(());
    };
    let data = serde_json::to_value(data).map_err(RelayError::Encode)?;
    core.hub
        .send_to(connection_id, OutboundFrame::Ack(AckFrame { ack, data }));
    Ok(())
}
