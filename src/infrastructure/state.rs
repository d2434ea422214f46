//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ReadingProgressRepository, UserRepository};
use crate::infrastructure::{SeaOrmReadingProgressRepository, SeaOrmUserRepository};

/// State shared across the embedding layer's request handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Reading-progress store
    pub reading_progress_repo: Arc<dyn ReadingProgressRepository>,
    /// User account store
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let reading_progress_repo = Arc::new(SeaOrmReadingProgressRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db.clone()));

        Self {
            db,
            reading_progress_repo,
            user_repo,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AsRef<DatabaseConnection> for AppState {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.db
    }
}
