//! share-profile handler

use crate::types::{ServerEvent, ShareProfileRequest};
use crate::validation::{normalize_room_id, validate_profile_link};

use super::RelayCore;

/// Update the caller's profile link and fan the member out to the whole room
///
/// Fire-and-forget: non-members and unusable links are dropped silently.
/// Returns whether anything was broadcast.
pub fn handle(
    core: &mut RelayCore,
    connection_id: &str,
    request: ShareProfileRequest,
) -> bool {
    let room_id = normalize_room_id(&request.room_id);
    let Some(link) = validate_profile_link(&request.profile_link) else {
        log::debug!("Dropping unusable profile link from {}", connection_id);
        return false;
    };
    let Some(member) = core.registry.set_profile_link(&room_id, connection_id, link) else {
        return false;
    };

    core.hub.emit(&room_id, &ServerEvent::UpdateProfile(member), None);
    true
}
