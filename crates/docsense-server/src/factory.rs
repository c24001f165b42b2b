//! Pipeline construction from configuration.

use docsense_core::analysis::DocumentPipeline;
use docsense_core::config::PipelineConfig;
use docsense_core::error::DocsenseResult;
use docsense_llm::BackendFactory;
use tracing::{info, warn};

/// Build the document pipeline from configuration.
///
/// A configured-but-unusable backend (bad credential, malformed key) only
/// degrades the pipeline to extractive analysis; it never blocks startup.
pub fn create_pipeline(config: PipelineConfig) -> DocsenseResult<DocumentPipeline> {
    let backend = match &config.backend {
        Some(provider_config) => {
            match BackendFactory::create(provider_config.provider, provider_config.config.clone()) {
                Ok(backend) => {
                    info!(
                        provider = ?provider_config.provider,
                        model = backend.model_name(),
                        "completion backend configured"
                    );
                    Some(backend)
                }
                Err(err) => {
                    warn!(error = %err, "completion backend unavailable, running extractive-only");
                    None
                }
            }
        }
        None => {
            info!("no completion backend configured, running extractive-only");
            None
        }
    };

    DocumentPipeline::new(backend, config)
}
