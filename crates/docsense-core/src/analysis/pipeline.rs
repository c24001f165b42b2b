//! The `process_document` orchestrator.

use std::sync::Arc;

use docsense_fetch::DocumentFetcher;

use crate::analysis::ai::AiAnalyzer;
use crate::analysis::extractive::ExtractiveAnalyzer;
use crate::config::PipelineConfig;
use crate::error::{DocsenseError, DocsenseResult};
use crate::text::segment;
use crate::traits::CompletionBackend;
use crate::types::{AnalysisResult, DocumentReference, Importance};

/// Hard cap on key points served by the partial key-points operation.
const KEY_POINTS_REQUEST_CAP: usize = 10;

/// Readability and importance for a piece of text, without the full
/// analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub readability_score: f64,
    pub importance: Importance,
}

/// Entry point for document analysis.
///
/// Owns the fetcher and both analyzers; the only error it ever surfaces is
/// [`DocsenseError::NoUsableContent`] - every downstream failure has already
/// degraded to a fallback by the time it gets here.
pub struct DocumentPipeline {
    analyzer: AiAnalyzer,
    extractive: ExtractiveAnalyzer,
    fetcher: DocumentFetcher,
    min_sentence_words: usize,
}

impl DocumentPipeline {
    /// Build a pipeline from configuration and an optional backend.
    pub fn new(
        backend: Option<Arc<dyn CompletionBackend>>,
        config: PipelineConfig,
    ) -> DocsenseResult<Self> {
        let fetcher = DocumentFetcher::new(config.fetch)
            .map_err(|e| DocsenseError::configuration(e.to_string()))?;

        Ok(Self {
            analyzer: AiAnalyzer::new(backend, config.analysis.clone()),
            extractive: ExtractiveAnalyzer::new(config.analysis.clone()),
            fetcher,
            min_sentence_words: config.analysis.min_sentence_words,
        })
    }

    /// Whether a completion backend is configured.
    pub fn has_backend(&self) -> bool {
        self.analyzer.has_backend()
    }

    /// Process a document reference: fetch the remote file if present,
    /// merge its text with any inline content, and analyze.
    ///
    /// Fails only when the merged text is empty after trimming.
    pub async fn process(&self, reference: &DocumentReference) -> DocsenseResult<AnalysisResult> {
        let fetched = match reference.file_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => self.fetcher.fetch_text(url).await,
            _ => String::new(),
        };

        let combined = assemble_content(reference.content.as_deref(), &fetched);
        if combined.trim().is_empty() {
            return Err(DocsenseError::NoUsableContent);
        }

        Ok(self.analyzer.analyze(&combined, &reference.category).await)
    }

    /// Process inline content only.
    pub async fn process_content(
        &self,
        content: &str,
        category: &str,
    ) -> DocsenseResult<AnalysisResult> {
        self.process(&DocumentReference::inline(content, category))
            .await
    }

    /// Extract up to `num_points` leading sentences as key points.
    pub fn key_points(&self, content: &str, num_points: usize) -> Vec<String> {
        let text = crate::text::normalize(content);
        let sentences = segment(&text, self.min_sentence_words);
        let n = num_points.clamp(1, KEY_POINTS_REQUEST_CAP);
        self.extractive.key_points(&sentences, n)
    }

    /// Compute readability and importance for a piece of text.
    pub fn text_metrics(&self, content: &str) -> TextMetrics {
        let text = crate::text::normalize(content);
        TextMetrics {
            readability_score: self.extractive.readability(&text),
            importance: self.extractive.importance(&text),
        }
    }
}

/// Merge inline content and fetched file text into one labeled document.
///
/// Blocks that are empty after trimming are omitted entirely, so the result
/// is empty exactly when neither source had text.
fn assemble_content(inline: Option<&str>, fetched: &str) -> String {
    let mut blocks = Vec::new();

    if let Some(content) = inline.map(str::trim).filter(|c| !c.is_empty()) {
        blocks.push(format!("Document details:\n{}", content));
    }
    let fetched = fetched.trim();
    if !fetched.is_empty() {
        blocks.push(format!("Extracted document text:\n{}", fetched));
    }

    blocks.join("\n\n")
}
