//! Remote document fetching with graceful degradation.

use crate::error::{FetchError, FetchResult};
use crate::ocr::OcrClient;
use crate::pdf::PdfTextExtractor;
use crate::types::{FetchConfig, FetchedFile, FileKind};

/// Downloads remote files and extracts their text.
///
/// The public entry point never fails: download errors, unrecognized
/// formats, PDF parse failures, and OCR outages all degrade to an empty
/// string. The absence of extracted text is a valid, silent outcome that
/// the caller is expected to tolerate.
pub struct DocumentFetcher {
    client: reqwest::Client,
    pdf: PdfTextExtractor,
    ocr: OcrClient,
}

impl DocumentFetcher {
    /// Build a fetcher with bounded timeouts from configuration.
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.download_timeout_secs))
            .build()
            .map_err(|e| {
                FetchError::Configuration(format!("failed to build download client: {}", e))
            })?;

        Ok(Self {
            client,
            pdf: PdfTextExtractor::new(config.min_pdf_text_chars),
            ocr: OcrClient::new(config.ocr)?,
        })
    }

    /// Download a remote file and extract whatever text it holds.
    ///
    /// Returns an empty string on any unrecoverable failure; failures are
    /// logged, never propagated.
    pub async fn fetch_text(&self, url: &str) -> String {
        let file = match self.download(url).await {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(url, error = %err, "file download failed");
                return String::new();
            }
        };

        self.extract_text(&file).await
    }

    /// Download bytes and transport metadata.
    async fn download(&self, url: &str) -> FetchResult<FetchedFile> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let bytes = response.bytes().await?.to_vec();
        tracing::debug!(url, bytes = bytes.len(), content_type = %content_type, "downloaded file");

        Ok(FetchedFile {
            bytes,
            content_type,
            url: url.to_string(),
        })
    }

    /// Route a downloaded file to the right extraction path.
    async fn extract_text(&self, file: &FetchedFile) -> String {
        match file.kind() {
            FileKind::Pdf => self.try_pdf(file).await.unwrap_or_default(),
            FileKind::Image => self.try_ocr(file).await.unwrap_or_default(),
            FileKind::Unknown => {
                // Nothing to go on: attempt PDF parsing first, then OCR.
                if let Some(text) = self.try_pdf(file).await {
                    return text;
                }
                self.try_ocr(file).await.unwrap_or_default()
            }
        }
    }

    async fn try_pdf(&self, file: &FetchedFile) -> Option<String> {
        match self.pdf.extract(&file.bytes).await {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(url = %file.url, error = %err, "pdf extraction yielded no text");
                None
            }
        }
    }

    async fn try_ocr(&self, file: &FetchedFile) -> Option<String> {
        match self.ocr.extract(file.bytes.clone()).await {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(url = %file.url, error = %err, "ocr yielded no text");
                None
            }
        }
    }
}
