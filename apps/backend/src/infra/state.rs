use crate::config::db::{DbKind, DbSettings};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_settings: Option<DbSettings>,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_settings: None,
            db_kind: None,
        }
    }

    /// Use defaults for `kind`, resolved at `build()` time.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_db_settings(mut self, settings: DbSettings) -> Self {
        self.db_settings = Some(settings);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let settings = match (self.db_settings, self.db_kind) {
            (Some(settings), _) => Some(settings),
            (None, Some(DbKind::SqliteMemory)) => Some(DbSettings::sqlite_memory()),
            (None, Some(kind)) => Some(DbSettings::for_kind(kind)?),
            (None, None) => None,
        };

        match settings {
            // single entrypoint: build + migrate
            Some(settings) => Ok(AppState::new(bootstrap_db(&settings).await?)),
            None => Ok(AppState::without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
