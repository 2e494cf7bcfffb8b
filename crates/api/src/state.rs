use std::sync::Arc;

use innkeeper_db::availability::Reconciler;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: innkeeper_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Serialized availability reconciler; every reservation mutation and
    /// the background sweep go through this single instance.
    pub reconciler: Arc<Reconciler>,
}
