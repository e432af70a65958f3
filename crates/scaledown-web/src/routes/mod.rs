//! HTTP routes for the web front-end.
//!
//! - `ui`: pages, stylesheet, and the 404 fallback
//! - `health`: liveness probe
//! - `metrics`: Prometheus scrape endpoint

pub mod health;
pub mod metrics;
pub mod ui;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::track_metrics;
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(ui::router())
        .merge(health::router())
        .merge(metrics::router())
        .fallback(ui::not_found)
        .layer(axum_mw::from_fn_with_state(Arc::clone(&state), track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
