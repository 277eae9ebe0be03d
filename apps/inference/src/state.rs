use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Chat completion backend. `HfRouterClient` in production, fakes in tests.
    pub llm: Arc<dyn ChatCompletion>,
    pub config: Config,
}
