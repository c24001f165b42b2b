//! Route-level tests against the in-process router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use docsense_core::config::PipelineConfig;
use docsense_server::{create_pipeline, create_server, AppState};

fn app() -> Router {
    let pipeline = create_pipeline(PipelineConfig::default()).expect("pipeline builds");
    create_server(AppState::new(pipeline))
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_service_and_backend_state() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "docsense");
    assert_eq!(body["backend_configured"], false);
}

#[tokio::test]
async fn analyze_rejects_empty_request() {
    let response = app().oneshot(json_post("/api/analyze", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn analyze_returns_full_contract() {
    let request = json_post(
        "/api/analyze",
        r#"{"content": "This license expires December 2025. It must be renewed within 30 days of expiry.", "category": "license"}"#,
    );
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body["summary"].as_str().unwrap().is_empty());
    assert!(body["key_points"].as_array().unwrap().len() <= 5);
    assert!(body["suggested_actions"].as_array().unwrap().len() <= 3);
    assert_eq!(body["importance"], "high");
    let score = body["readability_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[tokio::test]
async fn key_points_requires_content() {
    let response = app()
        .oneshot(json_post("/api/key-points", r#"{"content": "  "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn key_points_respects_requested_count() {
    let content = (0..6)
        .map(|i| format!("Sentence number {} has exactly six words.", i))
        .collect::<Vec<_>>()
        .join(" ");
    let body = serde_json::json!({ "content": content, "num_points": 2 }).to_string();

    let response = app().oneshot(json_post("/api/key-points", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["key_points"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn analyze_text_returns_metrics() {
    let response = app()
        .oneshot(json_post(
            "/api/analyze-text",
            r#"{"content": "This urgent notice demands immediate payment now."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["importance"], "critical");
    assert!(body["readability_score"].is_number());
}
