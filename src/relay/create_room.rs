//! create-room handler

use crate::types::RoomId;

use super::RelayCore;

/// Create a room and put the caller in its broadcast group
///
/// The caller is not added as a member; clients follow up with `join-room`.
pub fn handle(core: &mut RelayCore, connection_id: &str) -> RoomId {
    let room_id = core.registry.create_room();
    // A colliding code replaces the old room, so its group goes too
    core.hub.drop_group(&room_id);
    core.hub.join_group(&room_id, connection_id);
    log::info!("Room created: {} (by {})", room_id, connection_id);
    room_id
}
