use std::sync::Arc;

use blogsphere_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle, opened at startup and closed after shutdown.
    pub store: SharedStore,
    /// Server configuration (token secret, cookie mode, route protection).
    pub config: Arc<ServerConfig>,
}
