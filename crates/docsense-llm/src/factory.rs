//! Factory for creating completion backends.

use std::sync::Arc;

use docsense_core::config::BackendProvider;
use docsense_core::error::DocsenseResult;
use docsense_core::traits::{BackendConfig, CompletionBackend};

use crate::gemini::GeminiBackend;
use crate::groq::GroqBackend;
use crate::openai::OpenAiBackend;

/// Factory for creating completion backends.
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend from the given provider and configuration.
    pub fn create(
        provider: BackendProvider,
        config: BackendConfig,
    ) -> DocsenseResult<Arc<dyn CompletionBackend>> {
        match provider {
            BackendProvider::OpenAI => Ok(Arc::new(OpenAiBackend::new(config)?)),
            BackendProvider::Groq => Ok(Arc::new(GroqBackend::new(config)?)),
            BackendProvider::Gemini => Ok(Arc::new(GeminiBackend::new(config)?)),
        }
    }

    /// Create an OpenAI backend with default configuration.
    pub fn openai() -> DocsenseResult<Arc<dyn CompletionBackend>> {
        Self::create(BackendProvider::OpenAI, BackendConfig::default())
    }

    /// Create an OpenAI backend with a specific model.
    pub fn openai_with_model(model: impl Into<String>) -> DocsenseResult<Arc<dyn CompletionBackend>> {
        let config = BackendConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(BackendProvider::OpenAI, config)
    }

    /// Create a Groq backend with default configuration.
    pub fn groq() -> DocsenseResult<Arc<dyn CompletionBackend>> {
        Self::create(BackendProvider::Groq, BackendConfig::default())
    }

    /// Create a Groq backend with a specific model.
    pub fn groq_with_model(model: impl Into<String>) -> DocsenseResult<Arc<dyn CompletionBackend>> {
        let config = BackendConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(BackendProvider::Groq, config)
    }

    /// Create a Gemini backend with default configuration.
    pub fn gemini() -> DocsenseResult<Arc<dyn CompletionBackend>> {
        Self::create(BackendProvider::Gemini, BackendConfig::default())
    }

    /// Create a Gemini backend with a specific model.
    pub fn gemini_with_model(model: impl Into<String>) -> DocsenseResult<Arc<dyn CompletionBackend>> {
        let config = BackendConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(BackendProvider::Gemini, config)
    }
}
