//! JSON response shapes shared by every route.
//!
//! All responses carry `{message, success}`; operation-specific fields are
//! flattened next to them.

use serde::Serialize;

pub const MSG_ALL_GOOD: &str = "all good";
pub const MSG_USER_CREATED: &str = "user_created";
pub const MSG_PLAYER_FOUND: &str = "player_found";
pub const MSG_GAME_CREATED: &str = "game_created";
pub const MSG_GAME_FOUND: &str = "game_found";
pub const MSG_GAME_PLAYER_CREATED: &str = "game_player_created";
pub const MSG_GAME_UPDATED: &str = "game_updated";

/// Bare `{message, success}` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub message: String,
    pub success: bool,
}

impl Envelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Envelope with operation-specific payload fields.
#[derive(Debug, Clone, Serialize)]
pub struct WithEnvelope<T: Serialize> {
    #[serde(flatten)]
    pub payload: T,
    pub message: &'static str,
    pub success: bool,
}

impl<T: Serialize> WithEnvelope<T> {
    pub fn ok(payload: T, message: &'static str) -> Self {
        Self {
            payload,
            message,
            success: true,
        }
    }
}
