//! Input validation for user-supplied strings
//!
//! Names and chat text are escaped before they are stored or fanned out, so
//! no client ever receives markup another client typed.

mod input;

pub use input::{
    escape_html, normalize_room_id, sanitize_chat_text, sanitize_name, validate_profile_link,
    MAX_LINK_LEN, MAX_NAME_CHARS, MAX_TEXT_CHARS,
};
