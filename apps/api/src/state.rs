//! Shared handler state.

use inventory_db::Database;

/// State injected into every handler.
///
/// `Database` wraps a `SqlitePool`, so cloning is cheap and all clones share
/// the same connection.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
