//! chat-message handler

use crate::types::{ChatBroadcast, ChatMessageRequest, ServerEvent};
use crate::utils::time::clock_label;
use crate::validation::{normalize_room_id, sanitize_chat_text};

use super::RelayCore;

/// Fan a chat line out to every member of the room, sender included
///
/// Returns whether anything was broadcast.
pub fn handle(
    core: &mut RelayCore,
    connection_id: &str,
    request: ChatMessageRequest,
) -> bool {
    let room_id = normalize_room_id(&request.room_id);
    let Some(member) = core.registry.find_member(&room_id, connection_id) else {
        return false;
    };
    let Some(text) = sanitize_chat_text(&request.text) else {
        return false;
    };

    let event = ServerEvent::ChatMessage(ChatBroadcast {
        connection_id: member.connection_id.clone(),
        name: member.name.clone(),
        text,
        server_timestamp: clock_label(),
    });
    core.hub.emit(&room_id, &event, None);
    true
}
