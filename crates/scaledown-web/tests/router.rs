//! Integration tests for the web router.
//!
//! Drives the full middleware stack in-process with `tower::ServiceExt`;
//! no socket is bound.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use scaledown_web::config::WebConfig;
use scaledown_web::routes::build_router;
use scaledown_web::state::AppState;

fn test_state() -> Arc<AppState> {
    let config = WebConfig::from_lookup(|key| match key {
        "SCALEDOWN_SERVICE_NAME" => Some("web-test".to_owned()),
        "SCALEDOWN_ENVIRONMENT" => Some("test".to_owned()),
        _ => None,
    });
    Arc::new(AppState::new(&config))
}

/// Helper: send a request and return (status, content-type, body).
async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned())
        .unwrap_or_default();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String, String) {
    send(app, Method::GET, uri).await
}

// ── Pages ────────────────────────────────────────────────────────────

#[tokio::test]
async fn home_page_renders_in_layout() {
    let app = build_router(test_state());
    let (status, content_type, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<title>ScaleDown Commerce AI</title>"));
    assert!(body.contains("<h1 class=\"text-3xl font-semibold\">ScaleDown Commerce AI</h1>"));
    assert_eq!(
        body.matches("Production-grade RAG and recommendation engine with ScaleDown API integration.")
            .count(),
        1
    );
}

#[tokio::test]
async fn admin_page_has_single_inert_outline_button() {
    let app = build_router(test_state());
    let (status, _, body) = get(&app, "/admin").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>ScaleDown Commerce AI</title>"));
    assert!(body.contains("Admin / Model Ops"));
    assert_eq!(body.matches("<button").count(), 1);
    assert!(body.contains("data-variant=\"outline\">Create Feature Flag</button>"));
    assert!(!body.contains("<form"));
    assert!(!body.contains("<script"));
    assert!(!body.contains("onclick"));
}

#[tokio::test]
async fn repeated_renders_are_identical() {
    let app = build_router(test_state());
    for path in ["/", "/admin"] {
        let (_, _, first) = get(&app, path).await;
        let (_, _, second) = get(&app, path).await;
        assert_eq!(first, second, "{path} should render identically");
    }
}

#[tokio::test]
async fn unknown_path_is_layout_wrapped_404() {
    let app = build_router(test_state());
    let (status, content_type, body) = get(&app, "/does/not/exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<title>ScaleDown Commerce AI</title>"));
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn admin_page_rejects_post() {
    let app = build_router(test_state());
    let (status, _, _) = send(&app, Method::POST, "/admin").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let app = build_router(test_state());
    let (status, content_type, body) = get(&app, "/globals.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/css; charset=utf-8");
    assert!(body.contains(".bg-slate-950"));
    assert!(body.contains(".btn-outline"));
}

#[tokio::test]
async fn security_headers_are_set() {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}

// ── Operations ───────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_service_identity() {
    let app = build_router(test_state());
    let (status, content_type, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "web-test");
    assert_eq!(json["environment"], "test");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn metrics_count_previous_requests() {
    let state = test_state();
    let app = build_router(Arc::clone(&state));

    get(&app, "/").await;
    get(&app, "/").await;
    get(&app, "/admin").await;
    get(&app, "/missing-one").await;
    get(&app, "/missing-two").await;

    assert_eq!(state.metrics.request_count("GET", "/", 200).await, 2);
    assert_eq!(state.metrics.request_count("GET", "/admin", 200).await, 1);
    assert_eq!(state.metrics.request_count("GET", "unmatched", 404).await, 2);

    let (status, content_type, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain; version=0.0.4"));
    assert!(body.contains(
        "http_requests_total{service=\"web-test\",method=\"GET\",path=\"/\",status_code=\"200\"} 2"
    ));
    assert!(body.contains(
        "http_requests_total{service=\"web-test\",method=\"GET\",path=\"unmatched\",status_code=\"404\"} 2"
    ));
    assert!(body.contains(
        "http_request_duration_seconds_count{service=\"web-test\",method=\"GET\",path=\"/admin\"} 1"
    ));
    assert!(!body.contains("missing-one"));
}

#[tokio::test]
async fn unknown_methods_do_not_add_series() {
    let state = test_state();
    let app = build_router(Arc::clone(&state));

    for i in 0..20 {
        let method = Method::from_bytes(format!("X{i}").as_bytes()).unwrap();
        let (status, _, _) = send(&app, method, "/admin").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    assert_eq!(state.metrics.request_count("other", "/admin", 405).await, 20);

    let text = state.metrics.render().await;
    let series: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .collect();
    assert_eq!(series.len(), 1, "unexpected series: {series:?}");
    assert!(!text.contains("method=\"X0\""));
}
