//! Shared application state.

use std::sync::Arc;

use crate::llm::LlmChat;

/// State shared across request handlers.
///
/// `llm` is `None` when no provider is configured at startup; the generate
/// route then answers 503 instead of the server failing to boot.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }
}
