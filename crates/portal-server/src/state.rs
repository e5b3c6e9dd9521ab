//! Shared application state.

use sqlx::MySqlPool;

use crate::server::ServerConfig;

/// State shared by every handler.
pub struct AppState {
    /// The MySQL pool.
    pub pool: MySqlPool,
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Creates new app state.
    pub fn new(config: ServerConfig, pool: MySqlPool) -> Self {
        Self { pool, config }
    }
}
