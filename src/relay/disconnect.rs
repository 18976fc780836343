//! Disconnect cleanup

use crate::types::{RoomId, ServerEvent};

use super::RelayCore;

/// Drop the connection and tell each room it was in that it left
///
/// Emptied rooms stay in the registry; only the idle sweep removes them.
pub fn handle(core: &mut RelayCore, connection_id: &str) -> Vec<RoomId> {
    let removed = core.registry.remove_member(connection_id);
    core.hub.unregister(connection_id);

    let mut rooms = Vec::with_capacity(removed.len());
    for (room_id, member) in removed {
        core.hub
            .emit(&room_id, &ServerEvent::UserLeft(member.connection_id), None);
        rooms.push(room_id);
    }
    rooms
}
