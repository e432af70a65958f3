//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. Pages are pure renders, so the only things held
//! here are the service identity and the request metrics registry.

use crate::config::WebConfig;
use crate::metrics::RequestMetrics;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Service name reported by `/health`.
    pub service_name: String,
    /// Deployment environment reported by `/health`.
    pub environment: String,
    /// HTTP request counters and latency histograms.
    pub metrics: RequestMetrics,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: &WebConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            environment: config.environment.clone(),
            metrics: RequestMetrics::new(config.service_name.clone()),
        }
    }
}
