//! Normalization and escaping of user-supplied strings

use url::Url;

use crate::error::{RelayError, RelayResult};

/// Longest display name kept, in characters
pub const MAX_NAME_CHARS: usize = 64;

/// Longest chat line kept, in characters
pub const MAX_TEXT_CHARS: usize = 2000;

/// Longest profile link accepted, in bytes
pub const MAX_LINK_LEN: usize = 512;

/// Schemes a profile link may use
pub const ALLOWED_LINK_SCHEMES: &[&str] = &["https", "http"];

/// Room codes are case-insensitive; the registry stores them uppercase
pub fn normalize_room_id(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Trim, bound and escape a display name
pub fn sanitize_name(raw: &str) -> RelayResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RelayError::InvalidName("Name is required"));
    }
    Ok(escape_html(&truncate_chars(trimmed, MAX_NAME_CHARS)))
}

/// Trim, bound and escape a chat line; `None` when nothing is left to send
pub fn sanitize_chat_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(escape_html(&truncate_chars(trimmed, MAX_TEXT_CHARS)))
}

/// Accept an http(s) link with a host, or an empty string (clears the link)
pub fn validate_profile_link(raw: &str) -> Option<String> {
    let link = raw.trim();
    if link.is_empty() {
        return Some(String::new());
    }
    if link.len() > MAX_LINK_LEN || !link.chars().all(is_link_char) {
        return None;
    }

    let url = Url::parse(link).ok()?;
    if !ALLOWED_LINK_SCHEMES.contains(&url.scheme()) {
        return None;
    }
    url.host_str()
        .is_some_and(|host| !host.is_empty())
        .then(|| link.to_string())
}

fn is_link_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '<' | '>' | '`')
}

/// Escape the characters that are significant in HTML text and quoted attributes
pub fn escape_html(input: &str) -> String {
    html_escape::encode_quoted_attribute(input).into_owned()
}

fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}
