use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; the engine itself holds no
/// session state — everything per-request comes from extractors.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sitelog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
