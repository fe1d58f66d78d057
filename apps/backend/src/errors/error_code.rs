//! Error codes for the Canastra score service.
//!
//! Codes classify failures for logs and tests. They never reach the wire
//! directly: the public envelope only carries the coarse message returned
//! by [`ErrorCode::wire_message`].

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// Body could not be parsed as the expected JSON
    InvalidJson,
    /// Route exists but not for this method
    MethodNotAllowed,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,
    /// Game not found
    GameNotFound,
    /// Player is not attached to the game
    GamePlayerNotFound,
    /// Referenced row does not exist (foreign key)
    FkViolation,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Player already attached to the game
    AlreadyAttached,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE name, used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::GamePlayerNotFound => "GAME_PLAYER_NOT_FOUND",
            Self::FkViolation => "FK_VIOLATION",
            Self::NotFound => "NOT_FOUND",

            Self::AlreadyAttached => "ALREADY_ATTACHED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Public message placed in the response envelope.
    ///
    /// Validation failures are prefixed separately since their detail is
    /// part of the message (`validation_error: name can't be blank`).
    pub const fn wire_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::InvalidJson => "invalid_json",
            Self::MethodNotAllowed => "method_not_allowed",

            Self::PlayerNotFound
            | Self::GameNotFound
            | Self::GamePlayerNotFound
            | Self::FkViolation
            | Self::NotFound => "not_found",

            Self::AlreadyAttached | Self::Conflict => "conflict",

            Self::DbError
            | Self::DbUnavailable
            | Self::DbTimeout
            | Self::Internal
            | Self::ConfigError => "internal_server_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
