//! Room state

use std::time::Instant;

use serde::Serialize;

use super::{ConnectionId, Member, RoomId};

/// A named group of connections sharing a member roster
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    /// Join order is preserved
    pub members: Vec<Member>,
    /// Unix timestamp (seconds) of creation
    pub created_at: i64,
    /// When the member list last became empty; `None` while occupied
    #[serde(skip)]
    pub(crate) empty_since: Option<Instant>,
}

impl Room {
    /// Create an empty room, idle from `now`
    pub fn new(id: RoomId, created_at: i64, now: Instant) -> Self {
        Self {
            id,
            members: Vec::new(),
            created_at,
            empty_since: Some(now),
        }
    }

    /// Find a member by connection id
    pub fn member(&self, connection_id: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.connection_id == connection_id)
    }

    pub(crate) fn member_mut(&mut self, connection_id: &str) -> Option<&mut Member> {
        self.members
            .iter_mut()
            .find(|m| m.connection_id == connection_id)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Connection ids of all members, in join order
    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.members.iter().map(|m| m.connection_id.clone()).collect()
    }
}
