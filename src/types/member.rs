//! Member records held inside a room

use serde::{Deserialize, Serialize};

use super::ConnectionId;

/// A connection's participation record within a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub connection_id: ConnectionId,
    pub name: String,
    #[serde(default)]
    pub profile_link: String,
}

impl Member {
    /// Create a member with no profile link yet
    pub fn new(connection_id: ConnectionId, name: String) -> Self {
        Self {
            connection_id,
            name,
            profile_link: String::new(),
        }
    }
}
