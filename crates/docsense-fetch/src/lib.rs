//! docsense-fetch - remote document acquisition and text extraction.
//!
//! Given a remote file URL, downloads the bytes, classifies the format from
//! the URL path and transport content-type, and extracts raw text through a
//! PDF parsing path or a remote OCR call, falling between the two when
//! classification is ambiguous.
//!
//! The crate's defining property is graceful degradation: `fetch_text`
//! returns an empty string on any unrecoverable failure instead of
//! propagating an error, so callers can always treat "no text" as a plain
//! outcome.
//!
//! # Example
//!
//! ```ignore
//! use docsense_fetch::{DocumentFetcher, FetchConfig};
//!
//! let fetcher = DocumentFetcher::new(FetchConfig::default())?;
//! let text = fetcher.fetch_text("https://files.example.com/permit.pdf").await;
//! if text.is_empty() {
//!     // nothing extractable - a valid outcome
//! }
//! ```

mod error;
mod fetcher;
mod ocr;
mod pdf;
mod types;

pub use error::{FetchError, FetchResult};
pub use fetcher::DocumentFetcher;
pub use ocr::OcrClient;
pub use pdf::PdfTextExtractor;
pub use types::{classify, classify_url, FetchConfig, FetchedFile, FileKind, OcrConfig};
