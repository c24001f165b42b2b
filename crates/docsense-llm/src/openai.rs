//! OpenAI-compatible chat-completions backend.
//!
//! Speaks the `/chat/completions` wire format shared by OpenAI and a number
//! of compatible providers; [`crate::GroqBackend`] reuses this adapter with
//! a different base URL and credential.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use docsense_core::error::{DocsenseError, DocsenseResult};
use docsense_core::traits::{
    BackendConfig, CompletionBackend, CompletionResponse, GenerationOptions, TokenUsage,
};
use docsense_core::types::Message;

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI-compatible completion backend.
pub struct OpenAiBackend {
    client: Client,
    config: BackendConfig,
    base_url: String,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatError {
    error: ChatErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ChatErrorDetail {
    message: String,
}

impl OpenAiBackend {
    /// Create a backend against the OpenAI API.
    pub fn new(config: BackendConfig) -> DocsenseResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                DocsenseError::Configuration(
                    "OpenAI API key not found. Set OPENAI_API_KEY or provide api_key in config."
                        .to_string(),
                )
            })?;

        Self::with_endpoint(config, api_key, OPENAI_API_URL, DEFAULT_MODEL, "openai")
    }

    /// Create a backend against any OpenAI-compatible endpoint.
    pub(crate) fn with_endpoint(
        config: BackendConfig,
        api_key: String,
        default_base_url: &str,
        default_model: &str,
        label: &'static str,
    ) -> DocsenseResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth: reqwest::header::HeaderValue = format!("Bearer {}", api_key)
            .parse()
            .map_err(|_| DocsenseError::Configuration("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DocsenseError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = default_model.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
            label,
        })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> DocsenseResult<CompletionResponse> {
        let options = options.unwrap_or_default();

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: options.temperature.unwrap_or(self.config.temperature),
            max_tokens: options.max_tokens.unwrap_or(self.config.max_tokens),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DocsenseError::backend(format!("{} API request failed: {}", self.label, e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DocsenseError::backend(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let error: Result<ChatError, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(DocsenseError::backend(format!(
                "{} API error ({}): {}",
                self.label, status, message
            )));
        }

        let response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| DocsenseError::backend(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(
            model = %self.config.model,
            tokens = response.usage.as_ref().map(|u| u.total_tokens).unwrap_or_default(),
            "completion received"
        );

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        let usage = response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(CompletionResponse { content, usage })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            temperature: 0.2,
            max_tokens: 1024,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}], "usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4}}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("hi")
        );
        assert_eq!(response.usage.unwrap().total_tokens, 4);
    }

    #[test]
    fn test_empty_choices_tolerated() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
    }

    #[test]
    fn test_missing_key_is_a_configuration_error() {
        let config = BackendConfig {
            api_key: None,
            ..Default::default()
        };
        // Only deterministic when the variable is absent from the
        // environment; skip otherwise.
        if std::env::var("OPENAI_API_KEY").is_err() {
            assert!(matches!(
                OpenAiBackend::new(config),
                Err(DocsenseError::Configuration(_))
            ));
        }
    }
}
