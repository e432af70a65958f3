//! Request metrics middleware.
//!
//! Times every request and records it in [`crate::metrics::RequestMetrics`].
//! Requests that end in 404 share the `unmatched` path label and
//! non-standard methods share the `other` method label, so arbitrary
//! requests cannot grow the series set.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Path label used for requests that did not resolve to a route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Method label used for extension methods outside the standard set.
pub const OTHER_METHOD: &str = "other";

/// Metrics label for a request method.
pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::HEAD => "HEAD",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::PATCH => "PATCH",
        Method::OPTIONS => "OPTIONS",
        Method::CONNECT => "CONNECT",
        Method::TRACE => "TRACE",
        _ => OTHER_METHOD,
    }
}

/// Middleware that records request count and latency.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = method_label(req.method());
    let req_method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    let status = response.status();
    let label = if status == StatusCode::NOT_FOUND {
        UNMATCHED_PATH
    } else {
        path.as_str()
    };

    state
        .metrics
        .observe(method, label, status.as_u16(), elapsed)
        .await;

    tracing::debug!(
        method = %req_method,
        path = %path,
        status = status.as_u16(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "request complete"
    );

    response
}
