//! Connection hub: per-connection outbound queues and room broadcast groups

use std::collections::HashMap;

use tokio::sync::mpsc;

use crate::protocol::OutboundFrame;
use crate::types::{ConnectionId, RoomId, ServerEvent};

/// Sending half of a connection's outbound queue
pub type FrameSender = mpsc::UnboundedSender<OutboundFrame>;

/// Receiving half, drained by the socket writer
pub type FrameReceiver = mpsc::UnboundedReceiver<OutboundFrame>;

/// Live connections and the broadcast groups they have joined
#[derive(Debug, Default)]
pub struct ConnectionHub {
    connections: HashMap<ConnectionId, FrameSender>,
    /// Group members in join order
    groups: HashMap<RoomId, Vec<ConnectionId>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an outbound queue for a new connection
    pub fn register(&mut self, connection_id: ConnectionId) -> FrameReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.insert(connection_id, tx);
        rx
    }

    /// Close the connection's queue and drop it from every group
    pub fn unregister(&mut self, connection_id: &str) -> bool {
        self.groups.retain(|_, members| {
            members.retain(|m| m != connection_id);
            !members.is_empty()
        });
        self.connections.remove(connection_id).is_some()
    }

    #[cfg(test)]
    pub(crate) fn is_connected(&self, connection_id: &str) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Add a connection to a room's broadcast group (idempotent)
    pub fn join_group(&mut self, room_id: &str, connection_id: &str) {
        let members = self.groups.entry(room_id.to_string()).or_default();
        if !members.iter().any(|m| m == connection_id) {
            members.push(connection_id.to_string());
        }
    }

    pub fn group_members(&self, room_id: &str) -> &[ConnectionId] {
        self.groups.get(room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forget a group entirely
    pub fn drop_group(&mut self, room_id: &str) {
        self.groups.remove(room_id);
    }

    /// Queue a frame for one connection
    pub fn send_to(&self, connection_id: &str, frame: OutboundFrame) -> bool {
        match self.connections.get(connection_id) {
            Some(tx) => tx.send(frame).is_ok(),
            None => false,
        }
    }

    /// Queue an event for every member of a room's group, optionally skipping one
    ///
    /// Returns the number of connections the event was queued for.
    pub fn emit(&self, room_id: &str, event: &ServerEvent, except: Option<&str>) -> usize {
        let mut delivered = 0;
        for member in self.group_members(room_id) {
            if except == Some(member.as_str()) {
                continue;
            }
            if self.send_to(member, OutboundFrame::Event(event.clone())) {
                delivered += 1;
            }
        }
        log::debug!(
            "{} -> room {}: queued for {} connections",
            event.name(),
            room_id,
            delivered
        );
        delivered
    }
}
