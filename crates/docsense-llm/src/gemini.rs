//! Gemini completion backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use docsense_core::error::{DocsenseError, DocsenseResult};
use docsense_core::traits::{
    BackendConfig, CompletionBackend, CompletionResponse, GenerationOptions, TokenUsage,
};
use docsense_core::types::{Message, MessageRole};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini completion backend.
pub struct GeminiBackend {
    client: Client,
    config: BackendConfig,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata", default)]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize, Default)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend.
    pub fn new(config: BackendConfig) -> DocsenseResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                DocsenseError::Configuration(
                    "Gemini API key not found. Set GEMINI_API_KEY or provide api_key in config."
                        .to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DocsenseError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GEMINI_API_URL.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = DEFAULT_MODEL.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
            api_key,
        })
    }

    fn build_request(&self, messages: &[Message], options: &GenerationOptions) -> GeminiRequest {
        // Gemini takes the system instruction out of band; the rest of the
        // conversation maps user/assistant onto user/model roles.
        let system_instruction = messages
            .iter()
            .find(|m| m.role == MessageRole::System)
            .map(|m| GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: m.content.clone(),
                }],
            });

        let contents = messages
            .iter()
            .filter(|m| m.role != MessageRole::System)
            .map(|m| GeminiContent {
                role: Some(
                    match m.role {
                        MessageRole::Assistant => "model",
                        _ => "user",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: m.content.clone(),
                }],
            })
            .collect();

        GeminiRequest {
            system_instruction,
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: options.temperature.unwrap_or(self.config.temperature),
                max_output_tokens: options.max_tokens.unwrap_or(self.config.max_tokens),
            },
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> DocsenseResult<CompletionResponse> {
        let options = options.unwrap_or_default();
        let request = self.build_request(messages, &options);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model, self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DocsenseError::backend(format!("Gemini API request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DocsenseError::backend(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let error: Result<GeminiError, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(DocsenseError::backend(format!(
                "Gemini API error ({}): {}",
                status, message
            )));
        }

        let response: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| DocsenseError::backend(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(
            model = %self.config.model,
            tokens = response
                .usage_metadata
                .as_ref()
                .map(|u| u.total_token_count)
                .unwrap_or_default(),
            "completion received"
        );

        let content = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text);

        let usage = response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(CompletionResponse { content, usage })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
