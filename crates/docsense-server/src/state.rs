//! Server state management.

use std::sync::Arc;

use docsense_core::analysis::DocumentPipeline;

/// Shared application state.
///
/// The pipeline is immutable after startup, so state is a plain `Arc`
/// with no interior locking.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DocumentPipeline>,
}

impl AppState {
    /// Create application state from a built pipeline.
    pub fn new(pipeline: DocumentPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Whether a completion backend is configured.
    pub fn backend_configured(&self) -> bool {
        self.pipeline.has_backend()
    }
}
