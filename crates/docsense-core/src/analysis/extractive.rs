//! Deterministic extractive analysis.
//!
//! The pipeline's safety net: produces a complete [`AnalysisResult`] from
//! nothing but the document text and a category label. Pure, no I/O, always
//! succeeds - identical input yields identical output.

use crate::config::AnalysisConfig;
use crate::text::{normalize, segment};
use crate::types::{AnalysisResult, Importance, MAX_KEY_POINTS, MAX_SUMMARY_CHARS};

/// Placeholder summary when the text contains no usable sentences.
const EMPTY_SUMMARY: &str = "Unable to generate summary from provided text.";

/// Extractive analyzer over segmented sentences.
pub struct ExtractiveAnalyzer {
    config: AnalysisConfig,
}

impl ExtractiveAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer with default configuration.
    pub fn default_config() -> Self {
        Self::new(AnalysisConfig::default())
    }

    /// Run the full extractive analysis.
    pub fn analyze(&self, content: &str, category: &str) -> AnalysisResult {
        let text = normalize(content);
        let sentences = segment(&text, self.config.min_sentence_words);

        AnalysisResult {
            summary: self.summarize(&sentences),
            key_points: self.key_points(&sentences, MAX_KEY_POINTS),
            suggested_actions: self.config.actions_for(category),
            importance: self.importance(&text),
            readability_score: self.readability(&text),
        }
        .clamped()
    }

    /// Join the first few sentences into a summary.
    pub fn summarize(&self, sentences: &[String]) -> String {
        if sentences.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }
        let bound = sentences.len().min(self.config.summary_max_sentences);
        let summary = sentences[..bound].join(" ");
        crate::types::truncate_chars(&summary, MAX_SUMMARY_CHARS)
    }

    /// First `n` sentences, verbatim.
    pub fn key_points(&self, sentences: &[String], n: usize) -> Vec<String> {
        sentences.iter().take(n).cloned().collect()
    }

    /// Approximate grade-level readability, clamped to [0, 100].
    ///
    /// `0.39 * avg_words_per_sentence + 11.8 * (avg_chars_per_word / 5) - 15.59`.
    /// Text with no words or no sentence terminators scores 0.
    pub fn readability(&self, text: &str) -> f64 {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let sentence_count = count_terminator_runs(text);
        if sentence_count == 0 {
            return 0.0;
        }

        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = total_chars as f64 / words.len() as f64;
        let avg_sentence_length = words.len() as f64 / sentence_count as f64;

        let score = 0.39 * avg_sentence_length + 11.8 * (avg_word_length / 5.0) - 15.59;
        score.clamp(0.0, 100.0)
    }

    /// Classify importance from keyword tiers.
    ///
    /// Tiers are tested in priority order critical, high, medium, low on
    /// the lowercased text; the first tier with a matching keyword wins and
    /// the default is medium.
    pub fn importance(&self, text: &str) -> Importance {
        let haystack = text.to_lowercase();
        for (tier, keywords) in self.config.importance_keywords.tiers() {
            if keywords.iter().any(|k| haystack.contains(k.as_str())) {
                return tier;
            }
        }
        Importance::Medium
    }

    /// Suggested actions for a category (generic list for unknown ones).
    pub fn suggested_actions(&self, category: &str) -> Vec<String> {
        self.config.actions_for(category)
    }
}

/// Count maximal runs of sentence terminators (`.`, `!`, `?`).
fn count_terminator_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        let terminator = matches!(c, '.' | '!' | '?');
        if terminator && !in_run {
            runs += 1;
        }
        in_run = terminator;
    }
    runs
}
