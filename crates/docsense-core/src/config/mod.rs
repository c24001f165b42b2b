//! Configuration system for docsense.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use docsense_fetch::FetchConfig;

use crate::traits::BackendConfig;
use crate::types::{Importance, MAX_SUGGESTED_ACTIONS};

/// Completion backend provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    #[default]
    OpenAI,
    Groq,
    Gemini,
}

impl BackendProvider {
    /// Parse a provider name, tolerating case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "openai" => Some(BackendProvider::OpenAI),
            "groq" => Some(BackendProvider::Groq),
            "gemini" => Some(BackendProvider::Gemini),
            _ => None,
        }
    }
}

/// Provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendProviderConfig {
    /// Provider type.
    pub provider: BackendProvider,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: BackendConfig,
}

impl Default for BackendProviderConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::OpenAI,
            config: BackendConfig::default(),
        }
    }
}

/// Keyword tiers for importance classification.
///
/// Tiers are tested in fixed priority order critical, high, medium, low;
/// the first tier with any matching keyword wins and the default is medium.
/// That ordering and default are contractual; the membership below is
/// configuration. Matching is substring-based on lowercased text, so stems
/// like "expir" cover expires/expiry/expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceKeywords {
    pub critical: Vec<String>,
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for ImportanceKeywords {
    fn default() -> Self {
        Self {
            critical: to_strings(&["urgent", "immediate", "critical", "expired", "penalty", "violation"]),
            high: to_strings(&["important", "required", "mandatory", "deadline", "expir", "renew"]),
            medium: to_strings(&["review", "necessary", "recommended", "update"]),
            low: to_strings(&["optional", "informational", "reference", "archive"]),
        }
    }
}

impl ImportanceKeywords {
    /// Tiers in contractual priority order.
    pub fn tiers(&self) -> [(Importance, &[String]); 4] {
        [
            (Importance::Critical, self.critical.as_slice()),
            (Importance::High, self.high.as_slice()),
            (Importance::Medium, self.medium.as_slice()),
            (Importance::Low, self.low.as_slice()),
        ]
    }
}

/// Tunable parameters for both analysis paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum words for a segment to count as a sentence.
    pub min_sentence_words: usize,
    /// Number of leading sentences joined into the extractive summary.
    pub summary_max_sentences: usize,
    /// Character window of document content embedded in the backend prompt.
    pub prompt_window_chars: usize,
    /// Suggested actions for unknown categories.
    pub generic_actions: Vec<String>,
    /// Default summary for unknown categories.
    pub generic_summary: String,
    /// Default key points when the backend response carries none.
    pub default_key_points: Vec<String>,
    /// Readability score assumed when the backend response carries none.
    pub default_readability: f64,
    /// Keyword tiers for importance classification.
    pub importance_keywords: ImportanceKeywords,
    /// Category to suggested action list. Unknown categories use
    /// `generic_actions`.
    pub category_actions: HashMap<String, Vec<String>>,
    /// Category to default summary sentence, used when the backend response
    /// carries no usable summary.
    pub category_summaries: HashMap<String, String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sentence_words: 5,
            summary_max_sentences: 5,
            prompt_window_chars: 6000,
            generic_actions: to_strings(&[
                "Review and categorize properly",
                "Set relevant reminders",
                "Keep organized for easy access",
            ]),
            generic_summary:
                "Document uploaded successfully. Review and categorize for better organization."
                    .to_string(),
            default_key_points: to_strings(&[
                "Review document contents",
                "Document stored for future reference",
                "Set reminder for important dates if applicable",
            ]),
            default_readability: 75.0,
            importance_keywords: ImportanceKeywords::default(),
            category_actions: default_category_actions(),
            category_summaries: default_category_summaries(),
        }
    }
}

impl AnalysisConfig {
    /// Suggested actions for a category, capped at the contract limit.
    pub fn actions_for(&self, category: &str) -> Vec<String> {
        let mut actions = self
            .category_actions
            .get(&category.trim().to_lowercase())
            .unwrap_or(&self.generic_actions)
            .clone();
        actions.truncate(MAX_SUGGESTED_ACTIONS);
        actions
    }

    /// Default summary sentence for a category.
    pub fn summary_for(&self, category: &str) -> String {
        self.category_summaries
            .get(&category.trim().to_lowercase())
            .unwrap_or(&self.generic_summary)
            .clone()
    }
}

fn default_category_actions() -> HashMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        (
            "license",
            &[
                "Set reminder 30 days before expiry",
                "Verify all details are correct",
                "Keep digital and physical copies",
            ],
        ),
        (
            "certificate",
            &[
                "Verify with issuing authority if needed",
                "Add to professional portfolio",
                "Set renewal reminder if applicable",
            ],
        ),
        (
            "permit",
            &[
                "Note all permit conditions",
                "Set expiry reminder",
                "Keep accessible for inspections",
            ],
        ),
        (
            "insurance",
            &[
                "Review coverage annually",
                "Set premium payment reminders",
                "Update beneficiary information if needed",
            ],
        ),
        (
            "contract",
            &[
                "Review all terms carefully",
                "Note key deadlines and milestones",
                "Consult legal advice if unclear",
            ],
        ),
        (
            "tax",
            &[
                "Keep for minimum 7 years",
                "Organize by tax year",
                "Consult tax professional if needed",
            ],
        ),
        (
            "identity",
            &[
                "Renew before expiration",
                "Keep secure backup copies",
                "Update address if moved",
            ],
        ),
    ];

    table
        .iter()
        .map(|(category, actions)| (category.to_string(), to_strings(actions)))
        .collect()
}

fn default_category_summaries() -> HashMap<String, String> {
    let table: &[(&str, &str)] = &[
        (
            "license",
            "This is a license document. Please ensure it remains valid and renew before expiration.",
        ),
        (
            "certificate",
            "This certificate has been uploaded for record-keeping. Verify authenticity as needed.",
        ),
        (
            "permit",
            "This permit document grants specific authorization. Track expiry dates carefully.",
        ),
        (
            "insurance",
            "Insurance document uploaded. Review coverage details and premium due dates.",
        ),
        (
            "contract",
            "Legal contract stored for reference. Review terms and important deadlines.",
        ),
        (
            "tax",
            "Tax-related document. Keep for records and future reference during tax filing.",
        ),
        (
            "identity",
            "Identity document stored securely. Ensure it is renewed before expiration.",
        ),
    ];

    table
        .iter()
        .map(|(category, summary)| (category.to_string(), summary.to_string()))
        .collect()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Completion backend, if one is configured. `None` runs the pipeline
    /// on the extractive path only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendProviderConfig>,
    /// Analysis parameters.
    pub analysis: AnalysisConfig,
    /// Document fetcher parameters.
    pub fetch: FetchConfig,
}

impl PipelineConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::DocsenseResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| crate::error::DocsenseError::Configuration(e.to_string())),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| crate::error::DocsenseError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| crate::error::DocsenseError::Configuration(e.to_string())),
            _ => Err(crate::error::DocsenseError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// The backend is enabled when `DOCSENSE_PROVIDER` names one, or when a
    /// provider credential (`OPENAI_API_KEY`, `GROQ_API_KEY`,
    /// `GEMINI_API_KEY`) is present. Without either, the pipeline runs
    /// extractive-only.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let provider = std::env::var("DOCSENSE_PROVIDER")
            .ok()
            .and_then(|value| BackendProvider::parse(&value))
            .or_else(|| {
                [
                    ("OPENAI_API_KEY", BackendProvider::OpenAI),
                    ("GROQ_API_KEY", BackendProvider::Groq),
                    ("GEMINI_API_KEY", BackendProvider::Gemini),
                ]
                .into_iter()
                .find(|(var, _)| std::env::var(var).is_ok_and(|v| !v.trim().is_empty()))
                .map(|(_, provider)| provider)
            });

        if let Some(provider) = provider {
            let mut backend = BackendProviderConfig {
                provider,
                ..Default::default()
            };
            if let Ok(model) = std::env::var("DOCSENSE_MODEL") {
                backend.config.model = model;
            }
            config.backend = Some(backend);
        }

        if let Ok(window) = std::env::var("DOCSENSE_PROMPT_WINDOW") {
            if let Ok(chars) = window.parse() {
                config.analysis.prompt_window_chars = chars;
            }
        }

        if let Ok(key) = std::env::var("OCR_SPACE_API_KEY") {
            config.fetch.ocr.api_key = key;
        }

        config
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the completion backend configuration.
    pub fn backend(mut self, backend: BackendProviderConfig) -> Self {
        self.config.backend = Some(backend);
        self
    }

    /// Set analysis parameters.
    pub fn analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.config.analysis = analysis;
        self
    }

    /// Set fetch parameters.
    pub fn fetch(mut self, fetch: FetchConfig) -> Self {
        self.config.fetch = fetch;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_for_known_category() {
        let config = AnalysisConfig::default();
        let actions = config.actions_for("license");
        assert_eq!(actions.len(), 3);
        assert!(actions[0].contains("30 days"));
    }

    #[test]
    fn test_actions_for_unknown_category_uses_generic_list() {
        let config = AnalysisConfig::default();
        let actions = config.actions_for("recipe");
        assert_eq!(actions, config.generic_actions);
        assert!((2..=3).contains(&actions.len()));
        assert!(actions.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn test_actions_for_is_case_insensitive() {
        let config = AnalysisConfig::default();
        assert_eq!(config.actions_for("License"), config.actions_for("license"));
    }

    #[test]
    fn test_actions_never_exceed_contract_limit() {
        let mut config = AnalysisConfig::default();
        config.category_actions.insert(
            "stacked".to_string(),
            (0..6).map(|i| format!("action {}", i)).collect(),
        );
        assert_eq!(config.actions_for("stacked").len(), MAX_SUGGESTED_ACTIONS);
    }

    #[test]
    fn test_summary_for_unknown_category() {
        let config = AnalysisConfig::default();
        assert_eq!(config.summary_for("recipe"), config.generic_summary);
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!(BackendProvider::parse("Groq"), Some(BackendProvider::Groq));
        assert_eq!(BackendProvider::parse("anthropic"), None);
    }

    #[test]
    fn test_pipeline_config_toml_round_trip() {
        let config = PipelineConfig::builder()
            .backend(BackendProviderConfig {
                provider: BackendProvider::Groq,
                ..Default::default()
            })
            .build();

        let toml = toml::to_string(&config).unwrap();
        let back: PipelineConfig = toml::from_str(&toml).unwrap();
        assert_eq!(
            back.backend.map(|b| b.provider),
            Some(BackendProvider::Groq)
        );
    }
}
