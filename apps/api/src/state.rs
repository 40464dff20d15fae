use crate::config::Config;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: SessionStore::new(config.session_idle_ttl_secs),
        }
    }
}
