//! PDF text extraction using pdf-extract.

use crate::error::{FetchError, FetchResult};

/// PDF text extractor.
///
/// Wraps the synchronous pdf-extract calls in `spawn_blocking` so parsing
/// large documents does not stall the async runtime. Output below the
/// minimum character threshold is reported as empty, which lets image-only
/// PDFs fall through to OCR.
#[derive(Debug, Clone)]
pub struct PdfTextExtractor {
    min_text_chars: usize,
}

impl PdfTextExtractor {
    /// Create an extractor with the given minimum text threshold.
    pub fn new(min_text_chars: usize) -> Self {
        Self { min_text_chars }
    }

    /// Extract text from PDF bytes, one block per page.
    ///
    /// Pages are rendered as `[Page N]` blocks separated by blank lines.
    /// Blank pages are skipped but keep their page number.
    pub async fn extract(&self, bytes: &[u8]) -> FetchResult<String> {
        let buffer = bytes.to_vec();
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&buffer)
        })
        .await?
        .map_err(|e| FetchError::Pdf(e.to_string()))?;

        let text = join_pages(&pages);
        if text.trim().chars().count() < self.min_text_chars {
            return Err(FetchError::EmptyText);
        }

        tracing::debug!(
            pages = pages.len(),
            chars = text.len(),
            "extracted text from pdf"
        );
        Ok(text)
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Join per-page text into one document with page markers.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .enumerate()
        .filter(|(_, page)| !page.trim().is_empty())
        .map(|(i, page)| format!("[Page {}]\n{}", i + 1, page.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_adds_markers() {
        let pages = vec!["First page text".to_string(), "Second page text".to_string()];
        assert_eq!(
            join_pages(&pages),
            "[Page 1]\nFirst page text\n\n[Page 2]\nSecond page text"
        );
    }

    #[test]
    fn test_join_pages_skips_blank_pages_keeping_numbers() {
        let pages = vec![
            "Opening".to_string(),
            "   ".to_string(),
            "Closing".to_string(),
        ];
        assert_eq!(join_pages(&pages), "[Page 1]\nOpening\n\n[Page 3]\nClosing");
    }

    #[test]
    fn test_join_pages_empty() {
        assert_eq!(join_pages(&[]), "");
    }

    #[tokio::test]
    async fn test_extract_rejects_garbage_bytes() {
        let extractor = PdfTextExtractor::default();
        let result = extractor.extract(b"definitely not a pdf").await;
        assert!(result.is_err());
    }
}
