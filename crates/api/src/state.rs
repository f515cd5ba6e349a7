use std::sync::Arc;

use marquee_core::store::MovieStore;
use marquee_core::validation::MovieValidator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Movie persistence (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn MovieStore>,
    /// Field validator, built once at startup.
    pub validator: Arc<MovieValidator>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, config: ServerConfig) -> Self {
        Self {
            store,
            validator: Arc::new(MovieValidator::new()),
            config: Arc::new(config),
        }
    }
}
