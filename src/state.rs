//! Shared application state.
//!
//! `AppState` carries the resources handlers need, today just the database
//! connection. It is built once at startup and cloned into every request by
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Shared resources available to every request handler.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool and
/// cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the student records database.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Wraps the given connection in application state.
    ///
    /// # Arguments
    /// - `db` - Connection pool opened during startup
    ///
    /// # Returns
    /// - `AppState` - State ready to hand to the router
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
