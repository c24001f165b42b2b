//! Completion backend trait and related types.
//!
//! The analyzer treats every language-model provider as the same
//! capability: a single chat-style call that returns plain text. Provider
//! differences live in adapter crates, not in the pipeline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DocsenseResult;
use crate::types::Message;

/// Response from a completion call.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Generated text, if the provider returned any.
    pub content: Option<String>,
    /// Token usage statistics, when reported.
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Get the content or an empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Per-call generation options.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Sampling temperature; the analyzer favors low values for determinism.
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
}

/// Core completion trait - all backend providers implement this.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate a completion for the given messages.
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> DocsenseResult<CompletionResponse>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// Backend configuration shared by all provider adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Model name/identifier. Empty means "use the provider default".
    #[serde(default)]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (if not taken from the provider's environment variable).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override for the provider API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds. Calls must be bounded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_apply_on_deserialize() {
        let config: BackendConfig = serde_json::from_str(r#"{"model": "gpt-4o-mini"}"#).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.timeout_secs, 60);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_content_or_empty() {
        let response = CompletionResponse::default();
        assert_eq!(response.content_or_empty(), "");

        let response = CompletionResponse {
            content: Some("text".to_string()),
            usage: None,
        };
        assert_eq!(response.content_or_empty(), "text");
    }
}
