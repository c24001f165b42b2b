//! File classification types and configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// Detected kind of a fetched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Unknown,
}

/// Image extensions recognized in URL paths.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// Classify a file from its URL path alone.
///
/// Hosted-storage URLs frequently carry the extension mid-path rather than
/// as a clean suffix, so matching is containment on the lowercased path.
pub fn classify_url(url: &str) -> FileKind {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_lowercase(),
        Err(_) => url.to_lowercase(),
    };

    if path.contains(".pdf") {
        FileKind::Pdf
    } else if IMAGE_EXTENSIONS.iter().any(|ext| path.contains(ext)) {
        FileKind::Image
    } else {
        FileKind::Unknown
    }
}

/// Classify a file from its URL and the transport content-type.
///
/// The URL suffix wins; the content-type substring (`pdf` / `image`) breaks
/// ties; anything else is unknown.
pub fn classify(url: &str, content_type: &str) -> FileKind {
    match classify_url(url) {
        FileKind::Unknown => {
            let ct = content_type.to_lowercase();
            if ct.contains("pdf") {
                FileKind::Pdf
            } else if ct.contains("image") {
                FileKind::Image
            } else {
                FileKind::Unknown
            }
        }
        kind => kind,
    }
}

/// A downloaded file, alive only inside the fetcher.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    /// Raw downloaded bytes.
    pub bytes: Vec<u8>,
    /// Transport content-type header, empty when absent.
    pub content_type: String,
    /// Source URL.
    pub url: String,
}

impl FetchedFile {
    /// Combined classification from URL and transport hints.
    pub fn kind(&self) -> FileKind {
        classify(&self.url, &self.content_type)
    }
}

/// OCR service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Parse endpoint of the OCR service.
    pub endpoint: String,
    /// API key form field.
    pub api_key: String,
    /// Language form field.
    pub language: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.ocr.space/parse/image".to_string(),
            // Free-tier key; override for real deployments.
            api_key: "helloworld".to_string(),
            language: "eng".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Fetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Download timeout in seconds.
    pub download_timeout_secs: u64,
    /// Minimum extracted characters for a PDF parse to count as text.
    /// Image-only PDFs usually land under this and fall through to OCR.
    pub min_pdf_text_chars: usize,
    /// OCR service settings.
    pub ocr: OcrConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            download_timeout_secs: 30,
            min_pdf_text_chars: 10,
            ocr: OcrConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_url_by_suffix() {
        assert_eq!(classify_url("https://files.example.com/doc.pdf"), FileKind::Pdf);
        assert_eq!(classify_url("https://files.example.com/scan.JPG"), FileKind::Image);
        assert_eq!(classify_url("https://files.example.com/scan.webp"), FileKind::Image);
        assert_eq!(classify_url("https://files.example.com/blob"), FileKind::Unknown);
    }

    #[test]
    fn test_classify_url_ignores_query_noise() {
        assert_eq!(
            classify_url("https://cdn.example.com/v12/invoice.pdf?token=.png"),
            FileKind::Pdf
        );
    }

    #[test]
    fn test_classify_url_mid_path_extension() {
        // Hosted-storage style URL with a transformation segment after the name.
        assert_eq!(
            classify_url("https://res.example.com/image/upload/report.pdf/v2"),
            FileKind::Pdf
        );
    }

    #[test]
    fn test_classify_falls_back_to_content_type() {
        assert_eq!(classify("https://x.example/blob", "application/pdf"), FileKind::Pdf);
        assert_eq!(classify("https://x.example/blob", "image/png; charset=binary"), FileKind::Image);
        assert_eq!(classify("https://x.example/blob", "application/octet-stream"), FileKind::Unknown);
        assert_eq!(classify("https://x.example/blob", ""), FileKind::Unknown);
    }

    #[test]
    fn test_url_suffix_wins_over_content_type() {
        assert_eq!(classify("https://x.example/doc.pdf", "image/png"), FileKind::Pdf);
    }

    #[test]
    fn test_fetched_file_kind() {
        let file = FetchedFile {
            bytes: vec![1, 2, 3],
            content_type: "image/jpeg".to_string(),
            url: "https://x.example/photo".to_string(),
        };
        assert_eq!(file.kind(), FileKind::Image);
    }

    #[test]
    fn test_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.download_timeout_secs, 30);
        assert_eq!(config.ocr.timeout_secs, 60);
        assert_eq!(config.ocr.language, "eng");
    }
}
