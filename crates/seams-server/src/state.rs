use std::sync::Arc;

use seams::systems::SystemRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SystemRegistry>,
}

impl AppState {
    pub fn new(registry: SystemRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SystemRegistry::with_defaults())
    }
}
