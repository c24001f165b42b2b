//! docsense-core - document analysis pipeline.
//!
//! Ingests a document (inline text and/or a remote PDF/image reference) and
//! produces a normalized analysis: summary, key points, suggested actions,
//! importance tier, and readability score.
//!
//! The pipeline has two analysis paths converging on one output contract:
//! a completion backend whose semi-structured output is parsed tolerantly,
//! and a deterministic extractive analyzer that backs it up. Once any
//! non-empty text exists, a result is always produced.
//!
//! # Example
//!
//! ```ignore
//! use docsense_core::analysis::DocumentPipeline;
//! use docsense_core::config::PipelineConfig;
//! use docsense_core::types::DocumentReference;
//!
//! let pipeline = DocumentPipeline::new(None, PipelineConfig::default())?;
//! let result = pipeline
//!     .process(&DocumentReference::inline("This license expires soon.", "license"))
//!     .await?;
//! println!("{}: {}", result.importance, result.summary);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod text;
pub mod traits;
pub mod types;

pub use analysis::DocumentPipeline;
pub use error::{DocsenseError, DocsenseResult};
pub use types::AnalysisResult;
