//! docsense-server - REST API server for docsense.
//!
//! A thin HTTP layer over the analysis pipeline: three analysis endpoints
//! and a health check. All the interesting failure handling lives in the
//! pipeline; the server only maps the one surfaced error to a status code.
//!
//! # Example
//!
//! ```ignore
//! use docsense_core::config::PipelineConfig;
//! use docsense_server::{create_pipeline, create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = create_pipeline(PipelineConfig::from_env()).unwrap();
//!     let app = create_server(AppState::new(pipeline));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod factory;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use factory::create_pipeline;
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
