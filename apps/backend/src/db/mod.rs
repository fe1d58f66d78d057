pub mod txn;
pub mod txn_policy;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Borrow the store handle from `AppState`, or fail with `DbUnavailable`.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(AppError::db_unavailable)
}
