//! Document analysis: extractive fallback, AI-assisted path, response
//! parsing, and the orchestrator.

mod ai;
mod extractive;
pub mod parse;
mod pipeline;

pub use ai::AiAnalyzer;
pub use extractive::ExtractiveAnalyzer;
pub use pipeline::{DocumentPipeline, TextMetrics};
