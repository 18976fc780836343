//! Client request payloads and request/response replies

use serde::{Deserialize, Serialize};

use super::Member;

/// `join-room` request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    pub room_id: String,
    pub name: String,
}

/// `share-profile` request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareProfileRequest {
    pub room_id: String,
    #[serde(alias = "linkedin")]
    pub profile_link: String,
}

/// `chat-message` request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub room_id: String,
    #[serde(alias = "message")]
    pub text: String,
}

/// Reply to `join-room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRoomReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JoinRoomReply {
    /// Successful join carrying the full roster, joiner included
    pub fn joined(members: Vec<Member>) -> Self {
        Self {
            success: true,
            members: Some(members),
            message: None,
        }
    }

    /// Failed join with a human-readable reason
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            members: None,
            message: Some(message.into()),
        }
    }
}
