//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert through
//! `From<DbErr> for DomainError`, which lands here.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the first `table.column` from a SQLite
/// "UNIQUE constraint failed: table.col_a, table.col_b" message.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..]
        .split(|c: char| c == ',' || c.is_whitespace() || c == '"')
        .find(|s| !s.is_empty())
}

/// Map SQLite table.column to domain-specific conflicts.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "game_players.player_id" | "game_players.game_id" => Some((
            ConflictKind::AlreadyAttached,
            "Player is already attached to this game",
        )),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflicts.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_game_players_player_game") {
        return Some((
            ConflictKind::AlreadyAttached,
            "Player is already attached to this game",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");

        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }

        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::not_found(
            NotFoundKind::Reference,
            "Referenced player or game does not exist",
        );
    }

    if error_msg.contains("timeout")
        || error_msg.contains("database is locked")
        || error_msg.contains("pool")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
