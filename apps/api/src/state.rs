use std::sync::Arc;

use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once at startup and read-only afterwards; concurrent requests share
/// nothing else. The completion backend sits behind a trait object so tests
/// can swap in a mock.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionBackend>,
}
