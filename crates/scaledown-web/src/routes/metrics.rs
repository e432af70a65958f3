//! Prometheus metrics endpoint: `/metrics`
//!
//! Exposes request counts and latency histograms in Prometheus text format.
//! No authentication — designed for Prometheus scraping.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::metrics::CONTENT_TYPE;
use crate::state::AppState;

/// Build the `/metrics` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(prometheus_metrics))
}

/// `GET /metrics` — Prometheus text format.
///
/// Exposes:
/// - `http_requests_total` (counter): by service, method, path, status code
/// - `http_request_duration_seconds` (histogram): by service, method, path
async fn prometheus_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render().await;
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}
