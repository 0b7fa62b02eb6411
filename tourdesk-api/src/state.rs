use std::sync::Arc;

use tourdesk_store::app_config::Config;
use tourdesk_store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Arc::new(MemoryStore::from_config(config)),
        }
    }
}
