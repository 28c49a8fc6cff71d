use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data: every analysis is independent.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider. Default: `OpenAiClient`; tests swap in a stub.
    pub provider: Arc<dyn CompletionProvider>,
    pub config: Config,
}
