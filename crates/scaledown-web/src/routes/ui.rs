//! Page routes.
//!
//! Serves the home page at `/`, the admin placeholder at `/admin`, the
//! global stylesheet, and the layout-wrapped 404 fallback. All pages are
//! server-rendered HTML with no client-side script.

use axum::http::{header, Uri};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::error::AppError;
use crate::pages::{self, layout::STYLESHEET_PATH};
use crate::state::AppState;

/// Global stylesheet linked from the layout.
const GLOBALS_CSS: &str = include_str!("../../assets/globals.css");

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home_page))
        .route("/admin", get(admin_page))
        .route(STYLESHEET_PATH, get(stylesheet))
}

async fn home_page() -> Html<String> {
    Html(pages::home_document())
}

async fn admin_page() -> Html<String> {
    Html(pages::admin_document())
}

async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        GLOBALS_CSS,
    )
}

/// Fallback for any path no route matched.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
