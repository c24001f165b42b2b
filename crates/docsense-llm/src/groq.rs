//! Groq completion backend.
//!
//! Groq exposes the OpenAI chat-completions wire format, so this is a thin
//! configuration of [`OpenAiBackend`] with Groq's endpoint, credential, and
//! model default.

use async_trait::async_trait;

use docsense_core::error::{DocsenseError, DocsenseResult};
use docsense_core::traits::{
    BackendConfig, CompletionBackend, CompletionResponse, GenerationOptions,
};
use docsense_core::types::Message;

use crate::openai::OpenAiBackend;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq completion backend.
pub struct GroqBackend {
    inner: OpenAiBackend,
}

impl GroqBackend {
    /// Create a new Groq backend.
    pub fn new(config: BackendConfig) -> DocsenseResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .ok_or_else(|| {
                DocsenseError::Configuration(
                    "Groq API key not found. Set GROQ_API_KEY or provide api_key in config."
                        .to_string(),
                )
            })?;

        Ok(Self {
            inner: OpenAiBackend::with_endpoint(
                config,
                api_key,
                GROQ_API_URL,
                DEFAULT_MODEL,
                "groq",
            )?,
        })
    }
}

#[async_trait]
impl CompletionBackend for GroqBackend {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> DocsenseResult<CompletionResponse> {
        self.inner.generate(messages, options).await
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_applies() {
        let config = BackendConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let backend = GroqBackend::new(config).unwrap();
        assert_eq!(backend.model_name(), DEFAULT_MODEL);
    }

    #[test]
    fn test_explicit_model_is_kept() {
        let config = BackendConfig {
            api_key: Some("test-key".to_string()),
            model: "mixtral-8x7b-32768".to_string(),
            ..Default::default()
        };
        let backend = GroqBackend::new(config).unwrap();
        assert_eq!(backend.model_name(), "mixtral-8x7b-32768");
    }
}
