//! Member add/find/update/remove operations

use std::collections::HashMap;
use std::time::Instant;

use crate::error::{RelayError, RelayResult};
use crate::types::{ConnectionId, Member, Room, RoomId};

use super::RoomRegistry;

/// Append a member to a room
///
/// A connection that is already a member of the room is not appended twice.
pub fn add_member<'a>(
    registry: &'a mut RoomRegistry,
    room_id: &str,
    member: Member,
) -> RelayResult<&'a Room> {
    let room = registry
        .rooms
        .get_mut(room_id)
        .ok_or_else(|| RelayError::RoomNotFound(room_id.to_string()))?;

    if room.member(&member.connection_id).is_none() {
        registry
            .memberships
            .entry(member.connection_id.clone())
            .or_default()
            .push(room_id.to_string());
        room.members.push(member);
        room.empty_since = None;
    }
    Ok(&*room)
}

pub fn find_member<'a>(
    registry: &'a RoomRegistry,
    room_id: &str,
    connection_id: &str,
) -> Option<&'a Member> {
    registry.rooms.get(room_id)?.member(connection_id)
}

/// Overwrite a member's profile link, returning the updated record
pub fn set_profile_link(
    registry: &mut RoomRegistry,
    room_id: &str,
    connection_id: &str,
    link: String,
) -> Option<Member> {
    let member = registry.rooms.get_mut(room_id)?.member_mut(connection_id)?;
    member.profile_link = link;
    Some(member.clone())
}

/// Remove the connection from every room it belongs to
pub fn remove_member(registry: &mut RoomRegistry, connection_id: &str) -> Vec<(RoomId, Member)> {
    let Some(room_ids) = registry.memberships.remove(connection_id) else {
        return Vec::new();
    };

    let mut removed = Vec::new();
    for room_id in room_ids {
        let Some(room) = registry.rooms.get_mut(&room_id) else {
            continue;
        };
        let Some(index) = room
            .members
            .iter()
            .position(|m| m.connection_id == connection_id)
        else {
            continue;
        };

        let member = room.members.remove(index);
        if room.members.is_empty() {
            room.empty_since = Some(Instant::now());
        }
        removed.push((room_id, member));
    }
    removed
}

/// Drop one `room_id` entry from a connection's index
pub(crate) fn unindex(
    memberships: &mut HashMap<ConnectionId, Vec<RoomId>>,
    connection_id: &str,
    room_id: &str,
) {
    if let Some(rooms) = memberships.get_mut(connection_id) {
        if let Some(pos) = rooms.iter().position(|r| r == room_id) {
            rooms.remove(pos);
        }
        if rooms.is_empty() {
            memberships.remove(connection_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FixedRoomCodes;

    fn registry_with(codes: &[&str]) -> RoomRegistry {
        let mut registry =
            RoomRegistry::with_code_source(Box::new(FixedRoomCodes::new(codes.to_vec())));
        for _ in codes {
            registry.create_room();
        }
        registry
    }

    fn member(id: &str, name: &str) -> Member {
        Member::new(id.to_string(), name.to_string())
    }

    #[test]
    fn test_add_member_to_missing_room() {
        let mut registry = RoomRegistry::new();
        let result = registry.add_member("NOPE00", member("a", "Ada"));
        assert!(matches!(result, Err(RelayError::RoomNotFound(id)) if id == "NOPE00"));
        assert!(registry.rooms_of("a").is_empty());
    }

    #[test]
    fn test_add_member_preserves_join_order() {
        let mut registry = registry_with(&["ROOM01"]);
        registry.add_member("ROOM01", member("a", "Ada")).unwrap();
        let room = registry.add_member("ROOM01", member("b", "Bob")).unwrap();

        assert_eq!(room.connection_ids(), vec!["a", "b"]);
        assert!(room.empty_since.is_none());
    }

    #[test]
    fn test_add_member_twice_keeps_one_entry() {
        let mut registry = registry_with(&["ROOM01"]);
        registry.add_member("ROOM01", member("a", "Ada")).unwrap();
        let room = registry.add_member("ROOM01", member("a", "Ada again")).unwrap();

        assert_eq!(room.members.len(), 1);
        assert_eq!(room.members[0].name, "Ada");
        assert_eq!(registry.rooms_of("a"), ["ROOM01".to_string()]);
    }

    #[test]
    fn test_set_profile_link_only_touches_target() {
        let mut registry = registry_with(&["ROOM01"]);
        registry.add_member("ROOM01", member("a", "Ada")).unwrap();
        registry.add_member("ROOM01", member("b", "Bob")).unwrap();

        let updated = registry
            .set_profile_link("ROOM01", "a", "https://a.example".to_string())
            .unwrap();
        assert_eq!(updated.profile_link, "https://a.example");
        assert_eq!(registry.find_member("ROOM01", "b").unwrap().profile_link, "");
    }

    #[test]
    fn test_set_profile_link_for_non_member() {
        let mut registry = registry_with(&["ROOM01"]);
        assert!(registry
            .set_profile_link("ROOM01", "ghost", "https://x.y".to_string())
            .is_none());
        assert!(registry
            .set_profile_link("NOPE00", "ghost", "https://x.y".to_string())
            .is_none());
    }

    #[test]
    fn test_remove_member_from_every_room() {
        let mut registry = registry_with(&["ROOM01", "ROOM02"]);
        registry.add_member("ROOM01", member("a", "Ada")).unwrap();
        registry.add_member("ROOM02", member("a", "Ada")).unwrap();
        registry.add_member("ROOM02", member("b", "Bob")).unwrap();

        let removed = registry.remove_member("a");
        let rooms: Vec<_> = removed.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(rooms, vec!["ROOM01", "ROOM02"]);

        let emptied = registry.get_room("ROOM01").unwrap();
        assert!(emptied.is_empty());
        assert!(emptied.empty_since.is_some());
        assert_eq!(registry.get_room("ROOM02").unwrap().connection_ids(), vec!["b"]);
        assert!(registry.rooms_of("a").is_empty());
    }

    #[test]
    fn test_remove_unknown_connection() {
        let mut registry = registry_with(&["ROOM01"]);
        assert!(registry.remove_member("ghost").is_empty());
    }
}
