//! join-room handler

use crate::error::{RelayError, RelayResult};
use crate::types::{JoinRoomReply, JoinRoomRequest, Member, ServerEvent};
use crate::validation::{normalize_room_id, sanitize_name};

use super::RelayCore;

/// Add the caller to a room and announce them to the other members
pub fn handle(
    core: &mut RelayCore,
    connection_id: &str,
    request: JoinRoomRequest,
) -> JoinRoomReply {
    match join(core, connection_id, request) {
        Ok(members) => JoinRoomReply::joined(members),
        Err(err) => {
            log::debug!("Join rejected for {}: {:?}", connection_id, err);
            JoinRoomReply::rejected(err.to_string())
        }
    }
}

fn join(
    core: &mut RelayCore,
    connection_id: &str,
    request: JoinRoomRequest,
) -> RelayResult<Vec<Member>> {
    let room_id = normalize_room_id(&request.room_id);
    if !core.registry.contains_room(&room_id) {
        return Err(RelayError::RoomNotFound(room_id));
    }
    let name = sanitize_name(&request.name)?;

    // A repeated join answers with the roster but announces nobody
    let rejoin = core.registry.find_member(&room_id, connection_id).is_some();
    let member = Member::new(connection_id.to_string(), name);
    let members = core.registry.add_member(&room_id, member.clone())?.members.clone();
    core.hub.join_group(&room_id, connection_id);

    if !rejoin {
        log::info!("{} joined room {}", member.name, room_id);
        core.hub
            .emit(&room_id, &ServerEvent::UserJoined(member), Some(connection_id));
    }
    Ok(members)
}
