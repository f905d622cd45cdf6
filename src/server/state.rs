//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloned per request; `DatabaseConnection` is a pool handle, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the campaign database.
    pub db: DatabaseConnection,

    /// Whether list and retrieve accept requests without a token.
    pub allow_anonymous_reads: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, allow_anonymous_reads: bool) -> Self {
        Self {
            db,
            allow_anonymous_reads,
        }
    }
}
