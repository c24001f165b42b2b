//! docsense-llm - completion backend adapters for docsense.
//!
//! Every provider is an adapter behind the single
//! [`CompletionBackend`](docsense_core::traits::CompletionBackend)
//! capability: one chat-style call with a system instruction and a user
//! prompt, bounded output, returning plain text. The analysis pipeline
//! never sees provider differences.
//!
//! # Supported Providers
//!
//! - **OpenAI** - any `/chat/completions` model
//! - **Groq** - OpenAI-compatible wire format, Groq-hosted models
//! - **Gemini** - `generateContent` API
//!
//! # Example
//!
//! ```ignore
//! use docsense_llm::BackendFactory;
//!
//! // From explicit provider + config
//! let backend = BackendFactory::groq_with_model("llama-3.3-70b-versatile")?;
//!
//! // Or with provider defaults (credential from the environment)
//! let backend = BackendFactory::openai()?;
//! ```

mod factory;
mod gemini;
mod groq;
mod openai;

pub use factory::BackendFactory;
pub use gemini::GeminiBackend;
pub use groq::GroqBackend;
pub use openai::OpenAiBackend;

// Re-export core types for convenience
pub use docsense_core::config::BackendProvider;
pub use docsense_core::traits::{
    BackendConfig, CompletionBackend, CompletionResponse, GenerationOptions,
};
