use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::PlantService;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: planttracker_db::DbPool,
    /// Server configuration (accessed by the auth extractors and middleware).
    pub config: Arc<ServerConfig>,
    /// Plant service (owns the repository and its injected clock).
    pub service: PlantService,
}
