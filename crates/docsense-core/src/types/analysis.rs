//! The analysis result contract.

use serde::{Deserialize, Serialize};

/// Maximum length of a summary in characters.
pub const MAX_SUMMARY_CHARS: usize = 500;

/// Maximum number of key points in a result.
pub const MAX_KEY_POINTS: usize = 5;

/// Maximum number of suggested actions in a result.
pub const MAX_SUGGESTED_ACTIONS: usize = 3;

/// Importance tier assigned to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Importance {
    /// String form used on the wire and in keyword tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Medium => "medium",
            Importance::High => "high",
            Importance::Critical => "critical",
        }
    }

    /// Parse a tier name, tolerating case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the four-value set; callers
    /// default to [`Importance::Medium`] in that case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Importance::Low),
            "medium" => Some(Importance::Medium),
            "high" => Some(Importance::High),
            "critical" => Some(Importance::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single output contract produced by every analysis path.
///
/// Invariant: every field is populated. Producers fill absent values with
/// policy defaults before the result leaves the analyzer, so callers never
/// observe an empty summary or an out-of-range score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short summary, non-empty, at most [`MAX_SUMMARY_CHARS`] characters.
    pub summary: String,
    /// Key points in extraction order, at most [`MAX_KEY_POINTS`].
    pub key_points: Vec<String>,
    /// Suggested actions in order, at most [`MAX_SUGGESTED_ACTIONS`].
    pub suggested_actions: Vec<String>,
    /// Importance tier.
    pub importance: Importance,
    /// Readability score clamped to [0, 100].
    pub readability_score: f64,
}

impl AnalysisResult {
    /// Enforce the contract bounds on an assembled result.
    ///
    /// Truncates the summary to the character budget, caps both lists, and
    /// clamps the readability score. Field content is left untouched.
    pub fn clamped(mut self) -> Self {
        self.summary = truncate_chars(&self.summary, MAX_SUMMARY_CHARS);
        self.key_points.truncate(MAX_KEY_POINTS);
        self.suggested_actions.truncate(MAX_SUGGESTED_ACTIONS);
        self.readability_score = self.readability_score.clamp(0.0, 100.0);
        self
    }
}

/// Truncate a string to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
