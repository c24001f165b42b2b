//! Text preprocessing: normalization and sentence segmentation.
//!
//! Pure functions, no I/O. Both analysis paths feed document text through
//! here before doing anything else with it.

mod normalize;
mod segment;

pub use normalize::normalize;
pub use segment::{segment, DEFAULT_MIN_SENTENCE_WORDS};
