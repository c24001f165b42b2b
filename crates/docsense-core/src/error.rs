//! Error types for docsense operations.

use thiserror::Error;

/// Result type alias for docsense operations.
pub type DocsenseResult<T> = Result<T, DocsenseError>;

/// Main error type for all docsense operations.
///
/// The pipeline surfaces exactly one error to callers (`NoUsableContent`);
/// the remaining variants circulate between the analyzer and its backend
/// adapters and are absorbed by the fallback path before they reach a caller.
#[derive(Error, Debug)]
pub enum DocsenseError {
    /// Neither inline content nor a fetched file yielded any text.
    #[error("no usable content: document has no inline text and no extractable file text")]
    NoUsableContent,

    /// Completion backend call failed (transport, service, or response shape).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocsenseError {
    /// Create a backend error from a message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error wrapping an underlying cause.
    pub fn backend_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = DocsenseError::backend("connection refused");
        assert_eq!(err.to_string(), "backend error: connection refused");
    }

    #[test]
    fn test_backend_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = DocsenseError::backend_with_source("request failed", io);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_no_usable_content_display() {
        let msg = DocsenseError::NoUsableContent.to_string();
        assert!(msg.contains("no usable content"));
    }
}
