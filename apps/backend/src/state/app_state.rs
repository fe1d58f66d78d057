use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled store handle (absent only in tests that never touch the store)
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
