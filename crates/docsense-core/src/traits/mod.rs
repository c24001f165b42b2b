//! Trait definitions for pluggable capabilities.

mod completion;

pub use completion::{
    BackendConfig, CompletionBackend, CompletionResponse, GenerationOptions, TokenUsage,
};
