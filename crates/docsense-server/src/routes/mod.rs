//! Route definitions for the REST API.

mod analyze;
mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Document analysis
        .route("/api/analyze", post(analyze::analyze_document))
        .route("/api/key-points", post(analyze::extract_key_points))
        .route("/api/analyze-text", post(analyze::analyze_text))
        // Attach state
        .with_state(state)
}

pub use analyze::*;
pub use health::*;
