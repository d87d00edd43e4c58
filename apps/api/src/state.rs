use std::sync::Arc;

use crate::config::Config;
use crate::parsing::structurer::ResumeStructurer;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// LLM-backed structurer; `None` when no API key is configured, in
    /// which case uploads return raw parsed text only.
    pub structurer: Option<Arc<dyn ResumeStructurer>>,
    pub sessions: SessionStore,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests() -> Self {
        AppState {
            config: Config::for_tests(),
            structurer: None,
            sessions: SessionStore::new(3600),
        }
    }
}
