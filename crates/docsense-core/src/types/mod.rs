//! Core value types shared across the pipeline.

mod analysis;
mod document;
mod message;

pub use analysis::{AnalysisResult, Importance, MAX_KEY_POINTS, MAX_SUGGESTED_ACTIONS, MAX_SUMMARY_CHARS};
pub(crate) use analysis::truncate_chars;
pub use document::DocumentReference;
pub use message::{Message, MessageRole};
