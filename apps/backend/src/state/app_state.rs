use sea_orm::DatabaseConnection;

/// Application state shared by every worker through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool (absent in tests that never touch the DB)
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
