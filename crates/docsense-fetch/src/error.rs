//! Fetch error types.
//!
//! These circulate between the fetcher's stages only. The public
//! `fetch_text` entry point absorbs every one of them into an empty-text
//! outcome.

use thiserror::Error;

/// Errors that can occur while fetching and extracting document text.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Download or OCR transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote store answered outside the 2xx range.
    #[error("unexpected status {0} from file store")]
    Status(reqwest::StatusCode),

    /// PDF parsing failed.
    #[error("pdf extraction error: {0}")]
    Pdf(String),

    /// OCR service reported a processing error or an unusable body.
    #[error("ocr error: {0}")]
    Ocr(String),

    /// Extraction succeeded but produced no usable text.
    #[error("no text extracted")]
    EmptyText,

    /// Client construction failed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Task join error from spawn_blocking.
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
