//! Idle-room eviction policy
//!
//! A room is evicted once it has had no members for at least the TTL.
//! Occupied rooms are never evicted.

use std::time::{Duration, Instant};

use crate::types::RoomId;

use super::RoomRegistry;

/// Remove rooms that have been empty for `ttl` or longer as of `now`
pub fn evict_idle(registry: &mut RoomRegistry, now: Instant, ttl: Duration) -> Vec<RoomId> {
    let expired: Vec<RoomId> = registry
        .rooms
        .values()
        .filter(|room| room.members.is_empty())
        .filter(|room| {
            room.empty_since
                .is_some_and(|since| now.saturating_duration_since(since) >= ttl)
        })
        .map(|room| room.id.clone())
        .collect();

    // Empty rooms have no index entries to clean up
    for id in &expired {
        registry.rooms.remove(id);
    }
    expired
}
