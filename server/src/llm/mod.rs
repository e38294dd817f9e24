//! LLM adapter for the board generation feature.
//!
//! DESIGN
//! ======
//! A thin HTTP client for the Anthropic Messages API behind the
//! provider-neutral [`LlmChat`] trait, configured from environment
//! variables. Services depend on the trait so tests can substitute a mock.

pub mod anthropic;
pub mod config;
pub mod tools;
pub mod types;

pub use types::LlmChat;

use config::LlmConfig;
use types::{ChatResponse, LlmError, Message, Tool};

/// Concrete LLM client bound to one configured model.
pub struct LlmClient {
    inner: anthropic::AnthropicClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a config value fails to
    /// parse, or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = anthropic::AnthropicClient::new(config.api_key, config.timeouts)?;
        Ok(Self { inner, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(
        &self,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
        tools: Option<&[Tool]>,
    ) -> Result<ChatResponse, LlmError> {
        self.inner.chat(&self.model, max_tokens, system, messages, tools).await
    }
}
