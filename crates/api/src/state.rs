use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kartuli_db::DbPool,
    /// Server configuration (session TTL and cookie flags are read per request).
    pub config: Arc<ServerConfig>,
}
