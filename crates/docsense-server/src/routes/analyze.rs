//! Document analysis endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use docsense_core::types::{AnalysisResult, DocumentReference, Importance};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Analyze a document.
/// POST /api/analyze
///
/// Accepts inline content, a remote file URL, or both; rejects the request
/// when neither yields any text.
pub async fn analyze_document(
    State(state): State<AppState>,
    Json(request): Json<DocumentReference>,
) -> ApiResult<Json<AnalysisResult>> {
    let result = state.pipeline.process(&request).await?;
    Ok(Json(result))
}

/// Request body for key-point extraction.
#[derive(Debug, Deserialize)]
pub struct KeyPointsRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

fn default_num_points() -> usize {
    5
}

#[derive(Debug, Serialize)]
pub struct KeyPointsResponse {
    pub key_points: Vec<String>,
}

/// Extract key points from document text.
/// POST /api/key-points
pub async fn extract_key_points(
    State(state): State<AppState>,
    Json(request): Json<KeyPointsRequest>,
) -> ApiResult<Json<KeyPointsResponse>> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("Document content is required"));
    }

    let key_points = state.pipeline.key_points(&request.content, request.num_points);
    Ok(Json(KeyPointsResponse { key_points }))
}

/// Request body for text metric analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub readability_score: f64,
    pub importance: Importance,
}

/// Compute readability and importance for a piece of text.
/// POST /api/analyze-text
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> ApiResult<Json<AnalyzeTextResponse>> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("Document content is required"));
    }

    let metrics = state.pipeline.text_metrics(&request.content);
    Ok(Json(AnalyzeTextResponse {
        readability_score: metrics.readability_score,
        importance: metrics.importance,
    }))
}
