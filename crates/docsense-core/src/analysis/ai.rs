//! AI-assisted analysis with an embedded extractive fallback.

use std::sync::Arc;

use crate::analysis::extractive::ExtractiveAnalyzer;
use crate::analysis::parse;
use crate::config::AnalysisConfig;
use crate::traits::CompletionBackend;
use crate::types::{truncate_chars, AnalysisResult, Message};

const SYSTEM_PROMPT: &str = "You are a document analysis assistant for a document tracking \
     service. Answer only in the format the user requests, with no extra commentary.";

/// Analyzer that delegates to a completion backend and parses its output,
/// deferring to the extractive path on any failure.
///
/// `analyze` never fails visibly: missing credentials, transport errors,
/// empty completions, and unparsable output all still produce a conformant
/// [`AnalysisResult`].
pub struct AiAnalyzer {
    backend: Option<Arc<dyn CompletionBackend>>,
    extractive: ExtractiveAnalyzer,
    config: AnalysisConfig,
}

impl AiAnalyzer {
    /// Create an analyzer. `backend: None` makes every call extractive.
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>, config: AnalysisConfig) -> Self {
        Self {
            backend,
            extractive: ExtractiveAnalyzer::new(config.clone()),
            config,
        }
    }

    /// Whether a completion backend is configured.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// The embedded extractive analyzer.
    pub fn extractive(&self) -> &ExtractiveAnalyzer {
        &self.extractive
    }

    /// Analyze document content for a category.
    pub async fn analyze(&self, content: &str, category: &str) -> AnalysisResult {
        let backend = match &self.backend {
            Some(backend) if !content.trim().is_empty() => backend,
            _ => return self.extractive.analyze(content, category),
        };

        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(self.build_prompt(content, category)),
        ];

        match backend.generate(&messages, None).await {
            Ok(response) => {
                let text = response.content_or_empty();
                if text.trim().is_empty() {
                    tracing::warn!(
                        model = backend.model_name(),
                        "backend returned an empty completion, using extractive analysis"
                    );
                    return self.extractive.analyze(content, category);
                }
                let fields = parse::parse_response(text);
                parse::finalize(fields, category, &self.config)
            }
            Err(err) => {
                tracing::warn!(
                    model = backend.model_name(),
                    error = %err,
                    "backend call failed, using extractive analysis"
                );
                self.extractive.analyze(content, category)
            }
        }
    }

    /// Build the analysis prompt with a bounded content window.
    fn build_prompt(&self, content: &str, category: &str) -> String {
        let window = truncate_chars(content, self.config.prompt_window_chars);
        format!(
            "Analyze the following document from the \"{category}\" category.\n\n\
             Respond with these labeled sections:\n\
             SUMMARY: a concise summary of at most 500 characters\n\
             KEY_POINTS: up to 5 bullet points, each line starting with \"-\"\n\
             SUGGESTED_ACTIONS: up to 3 bullet points, each line starting with \"-\"\n\
             IMPORTANCE: one of low, medium, high, critical\n\
             READABILITY_SCORE: a number between 0 and 100\n\n\
             A single JSON object with the keys \"summary\", \"key_points\", \
             \"suggested_actions\", \"importance\" and \"readability_score\" is also \
             accepted.\n\n\
             Document content:\n{window}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::error::{DocsenseError, DocsenseResult};
    use crate::traits::{CompletionResponse, GenerationOptions};
    use crate::types::Importance;

    /// Backend double that returns a canned reply.
    struct StaticBackend {
        reply: Option<String>,
        fail: bool,
    }

    impl StaticBackend {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                fail: true,
            })
        }
    }

    #[async_trait]
    impl CompletionBackend for StaticBackend {
        async fn generate(
            &self,
            _messages: &[Message],
            _options: Option<GenerationOptions>,
        ) -> DocsenseResult<CompletionResponse> {
            if self.fail {
                return Err(DocsenseError::backend("simulated outage"));
            }
            Ok(CompletionResponse {
                content: self.reply.clone(),
                usage: None,
            })
        }

        fn model_name(&self) -> &str {
            "static-test-model"
        }
    }

    const CONTENT: &str = "This contract is mandatory reading. It covers twelve months of service terms in detail.";

    #[tokio::test]
    async fn test_no_backend_uses_extractive_path() {
        let analyzer = AiAnalyzer::new(None, AnalysisConfig::default());
        let result = analyzer.analyze(CONTENT, "contract").await;
        let expected = analyzer.extractive().analyze(CONTENT, "contract");
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_backend_json_reply_is_parsed() {
        let backend = StaticBackend::replying(
            r#"{"summary": "Service contract for one year.", "key_points": ["Twelve month term"], "suggested_actions": ["Review terms"], "importance": "high", "readability_score": 48}"#,
        );
        let analyzer = AiAnalyzer::new(Some(backend), AnalysisConfig::default());
        let result = analyzer.analyze(CONTENT, "contract").await;

        assert_eq!(result.summary, "Service contract for one year.");
        assert_eq!(result.key_points, vec!["Twelve month term"]);
        assert_eq!(result.importance, Importance::High);
        assert_eq!(result.readability_score, 48.0);
    }

    #[tokio::test]
    async fn test_backend_partial_reply_fills_per_field_defaults() {
        // Only a summary comes back; the rest is defaulted, not discarded.
        let backend = StaticBackend::replying(r#"{"summary": "Just a summary."}"#);
        let analyzer = AiAnalyzer::new(Some(backend), AnalysisConfig::default());
        let result = analyzer.analyze(CONTENT, "other").await;

        let config = AnalysisConfig::default();
        assert_eq!(result.summary, "Just a summary.");
        assert_eq!(result.key_points, config.default_key_points);
        assert_eq!(result.suggested_actions, config.actions_for("other"));
        assert_eq!(result.importance, Importance::Medium);
        assert_eq!(result.readability_score, 75.0);
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_extractive() {
        let analyzer = AiAnalyzer::new(Some(StaticBackend::failing()), AnalysisConfig::default());
        let result = analyzer.analyze(CONTENT, "contract").await;
        let expected = analyzer.extractive().analyze(CONTENT, "contract");
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_empty_completion_falls_back_to_extractive() {
        let analyzer = AiAnalyzer::new(
            Some(StaticBackend::replying("   ")),
            AnalysisConfig::default(),
        );
        let result = analyzer.analyze(CONTENT, "contract").await;
        let expected = analyzer.extractive().analyze(CONTENT, "contract");
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_empty_content_skips_backend() {
        // The backend would panic the contract if called with no content;
        // instead the extractive placeholder result comes back.
        let backend = StaticBackend::replying("{\"summary\": \"should not be used\"}");
        let analyzer = AiAnalyzer::new(Some(backend), AnalysisConfig::default());
        let result = analyzer.analyze("   ", "other").await;
        assert_eq!(result.summary, "Unable to generate summary from provided text.");
    }

    #[test]
    fn test_prompt_window_truncation() {
        let mut config = AnalysisConfig::default();
        config.prompt_window_chars = 50;
        let analyzer = AiAnalyzer::new(None, config);

        let long_content = "x".repeat(200);
        let prompt = analyzer.build_prompt(&long_content, "other");
        assert!(prompt.contains(&"x".repeat(50)));
        assert!(!prompt.contains(&"x".repeat(51)));
        assert!(prompt.contains("\"other\" category"));
    }
}
