//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared state cloned into each request handler via Axum's state
/// extraction. `DatabaseConnection` is a pool, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub validate_on_update: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            validate_on_update: config.validate_on_update,
        }
    }
}
