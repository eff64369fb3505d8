use crate::config::BridgeConfig;
use std::sync::Arc;

/// Shared application state passed to the middleware and route handlers.
/// The config is read once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BridgeConfig>,
}

impl AppState {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
