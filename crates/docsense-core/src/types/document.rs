//! Inbound document reference.

use serde::{Deserialize, Serialize};

/// A request-scoped reference to a document to analyze.
///
/// At least one of `content` / `file_url` must resolve to non-empty text or
/// the pipeline rejects the request. Unknown categories behave as "other".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentReference {
    /// Inline document text, if the caller already has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Remote file to download and extract (PDF or image).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Document category label (license, certificate, insurance, ...).
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "other".to_string()
}

impl DocumentReference {
    /// Reference carrying only inline content.
    pub fn inline(content: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            file_url: None,
            category: category.into(),
        }
    }

    /// Reference carrying only a remote file URL.
    pub fn remote(file_url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            content: None,
            file_url: Some(file_url.into()),
            category: category.into(),
        }
    }
}
