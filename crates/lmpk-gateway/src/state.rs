use std::sync::Arc;

use jiff::Timestamp;
use lmpk_core::RedirectStore;

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RedirectStore>,
    config: Arc<GatewayConfig>,
    started_at: Timestamp,
}

impl AppState {
    pub fn new(store: Arc<dyn RedirectStore>, config: GatewayConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            started_at: Timestamp::now(),
        }
    }

    pub fn store(&self) -> &dyn RedirectStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }
}
