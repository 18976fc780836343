//! Room Registry - in-memory room and membership store
//!
//! Rooms live for the lifetime of the process (or until the idle-room sweep
//! evicts them). A connection index maps each connection to the rooms it is
//! a member of, so disconnect cleanup never has to scan every room.

mod codes;
mod eviction;
mod membership;

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use crate::error::RelayResult;
use crate::types::{ConnectionId, Member, Room, RoomId};
use crate::utils::time::current_timestamp;

pub use codes::{FixedRoomCodes, RandomRoomCodes, RoomCodeSource, ROOM_CODE_LEN};

/// Draws taken from the code source before accepting a colliding code
pub const MAX_CODE_ATTEMPTS: usize = 8;

/// Process-scoped store of rooms and their members
pub struct RoomRegistry {
    pub(crate) rooms: HashMap<RoomId, Room>,
    pub(crate) memberships: HashMap<ConnectionId, Vec<RoomId>>,
    codes: Box<dyn RoomCodeSource>,
}

impl RoomRegistry {
    /// Create an empty registry drawing random room codes
    pub fn new() -> Self {
        Self::with_code_source(Box::new(RandomRoomCodes))
    }

    /// Create an empty registry with an injected code source
    pub fn with_code_source(codes: Box<dyn RoomCodeSource>) -> Self {
        Self {
            rooms: HashMap::new(),
            memberships: HashMap::new(),
            codes,
        }
    }

    /// Generate a code and insert an empty room under it
    ///
    /// Codes already in use are redrawn up to [`MAX_CODE_ATTEMPTS`] times; if
    /// every draw collides the last code overwrites the existing room.
    pub fn create_room(&mut self) -> RoomId {
        let mut code = self.codes.next_code();
        for _ in 1..MAX_CODE_ATTEMPTS {
            if !self.rooms.contains_key(&code) {
                break;
            }
            code = self.codes.next_code();
        }

        if let Some(previous) = self.insert_room(code.clone()) {
            log::warn!(
                "Room code {} collided; replaced a room with {} members",
                code,
                previous.members.len()
            );
        }
        code
    }

    /// Insert an empty room under `id`, returning any room it replaced
    pub fn insert_room(&mut self, id: RoomId) -> Option<Room> {
        let room = Room::new(id.clone(), current_timestamp(), Instant::now());
        let previous = self.rooms.insert(id.clone(), room);
        if let Some(old) = &previous {
            for member in &old.members {
                membership::unindex(&mut self.memberships, &member.connection_id, &id);
            }
        }
        previous
    }

    pub fn get_room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn contains_room(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Rooms the connection is currently a member of, in join order
    pub fn rooms_of(&self, connection_id: &str) -> &[RoomId] {
        self.memberships
            .get(connection_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ordered copy of every room, for diagnostics
    pub fn snapshot(&self) -> BTreeMap<RoomId, Room> {
        self.rooms
            .iter()
            .map(|(id, room)| (id.clone(), room.clone()))
            .collect()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Membership and eviction operations live in submodules
impl RoomRegistry {
    pub fn add_member(&mut self, room_id: &str, member: Member) -> RelayResult<&Room> {
        membership::add_member(self, room_id, member)
    }

    pub fn find_member(&self, room_id: &str, connection_id: &str) -> Option<&Member> {
        membership::find_member(self, room_id, connection_id)
    }

    pub fn set_profile_link(
        &mut self,
        room_id: &str,
        connection_id: &str,
        link: String,
    ) -> Option<Member> {
        membership::set_profile_link(self, room_id, connection_id, link)
    }

    pub fn remove_member(&mut self, connection_id: &str) -> Vec<(RoomId, Member)> {
        membership::remove_member(self, connection_id)
    }

    pub fn evict_idle(&mut self, now: Instant, ttl: Duration) -> Vec<RoomId> {
        eviction::evict_idle(self, now, ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_room_inserts_empty_room() {
        let mut registry = RoomRegistry::new();
        let id = registry.create_room();

        let room = registry.get_room(&id).unwrap();
        assert_eq!(room.id, id);
        assert!(room.is_empty());
        assert_eq!(registry.room_count(), 1);
    }

    #[test]
    fn test_create_room_redraws_taken_codes() {
        let codes = FixedRoomCodes::new(["AAAAAA", "AAAAAA", "BBBBBB"]);
        let mut registry = RoomRegistry::with_code_source(Box::new(codes));

        assert_eq!(registry.create_room(), "AAAAAA");
        assert_eq!(registry.create_room(), "BBBBBB");
        assert_eq!(registry.room_count(), 2);
    }

    #[test]
    fn test_create_room_overwrites_when_every_draw_collides() {
        let codes = FixedRoomCodes::new(["SAME01"]);
        let mut registry = RoomRegistry::with_code_source(Box::new(codes));

        let id = registry.create_room();
        registry
            .add_member(&id, Member::new("a".to_string(), "Ada".to_string()))
            .unwrap();

        assert_eq!(registry.create_room(), "SAME01");
        assert_eq!(registry.room_count(), 1);
        assert!(registry.get_room("SAME01").unwrap().is_empty());
        assert!(registry.rooms_of("a").is_empty());
    }

    #[test]
    fn test_snapshot_is_ordered() {
        let codes = FixedRoomCodes::new(["ZZZ999", "AAA111"]);
        let mut registry = RoomRegistry::with_code_source(Box::new(codes));
        registry.create_room();
        registry.create_room();

        let ids: Vec<_> = registry.snapshot().into_keys().collect();
        assert_eq!(ids, vec!["AAA111", "ZZZ999"]);
    }
}
