//! HTTP error type for the web front-end.
//!
//! Errors render as full HTML pages through the shared layout so that a
//! browser never sees a bare status line.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::pages::{self, not_found, root_layout};

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No page exists at the requested path.
    #[error("no page at {0}")]
    NotFound(String),
    /// Unexpected failure while producing a response.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let document = match &self {
            Self::NotFound(path) => {
                tracing::debug!(path = %path, "page not found");
                pages::not_found_document()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                root_layout(&not_found::render_internal_error())
            }
        };
        (status, Html(document)).into_response()
    }
}
