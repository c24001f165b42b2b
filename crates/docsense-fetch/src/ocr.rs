//! Remote OCR client.
//!
//! Speaks the OCR.space parse contract: a multipart POST carrying the image
//! bytes plus `apikey` and `language` form fields, answered with a JSON body
//! of parsed results. Only `ParsedResults[0].ParsedText` is read, and only
//! when the service does not report a processing error.

use serde::Deserialize;

use crate::error::{FetchError, FetchResult};
use crate::types::OcrConfig;

/// Client for a remote OCR service.
pub struct OcrClient {
    client: reqwest::Client,
    config: OcrConfig,
}

impl OcrClient {
    /// Create a client with a bounded request timeout.
    pub fn new(config: OcrConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Configuration(format!("failed to build ocr client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Run OCR over image bytes and return the recognized text.
    pub async fn extract(&self, bytes: Vec<u8>) -> FetchResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name("document.png");
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("apikey", self.config.api_key.clone())
            .text("language", self.config.language.clone());

        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: OcrResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Ocr(format!("unreadable response body: {}", e)))?;

        let text = parsed_text(&body)?;
        tracing::debug!(chars = text.len(), "ocr extracted text");
        Ok(text)
    }
}

/// OCR service response body.
#[derive(Debug, Deserialize)]
pub(crate) struct OcrResponse {
    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored_on_processing: bool,
    /// String or array of strings depending on the failure.
    #[serde(rename = "ErrorMessage", default)]
    error_message: Option<serde_json::Value>,
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<OcrParsedResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OcrParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

/// Pull the recognized text out of a response body.
pub(crate) fn parsed_text(body: &OcrResponse) -> FetchResult<String> {
    if body.is_errored_on_processing {
        let message = body
            .error_message
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unspecified processing error".to_string());
        return Err(FetchError::Ocr(message));
    }

    match body.parsed_results.first() {
        Some(result) => Ok(result.parsed_text.clone()),
        None => Err(FetchError::EmptyText),
    }
}
