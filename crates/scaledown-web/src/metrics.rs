//! In-process HTTP request metrics.
//!
//! Counts requests by `(method, path, status_code)` and records latency
//! histograms by `(method, path)`. Rendered in Prometheus text format by
//! the `/metrics` route.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

use tokio::sync::RwLock;

/// Histogram bucket upper bounds in seconds.
const BUCKETS: [f64; 14] = [
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// `le` label values matching [`BUCKETS`].
const BUCKET_LABELS: [&str; 14] = [
    "0.005", "0.01", "0.025", "0.05", "0.075", "0.1", "0.25", "0.5", "0.75", "1.0", "2.5",
    "5.0", "7.5", "10.0",
];

/// Content type for Prometheus text exposition.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RouteKey {
    method: String,
    path: String,
}

#[derive(Debug, Default, Clone)]
struct Histogram {
    /// Cumulative count per bucket.
    buckets: [u64; BUCKETS.len()],
    sum: f64,
    count: u64,
}

impl Histogram {
    fn observe(&mut self, seconds: f64) {
        for (bound, slot) in BUCKETS.iter().zip(self.buckets.iter_mut()) {
            if seconds <= *bound {
                *slot = slot.saturating_add(1);
            }
        }
        self.sum += seconds;
        self.count = self.count.saturating_add(1);
    }
}

#[derive(Debug, Default)]
struct Registry {
    requests: BTreeMap<(RouteKey, u16), u64>,
    latency: BTreeMap<RouteKey, Histogram>,
}

/// Request counters and latency histograms for one service.
#[derive(Debug)]
pub struct RequestMetrics {
    service: String,
    registry: RwLock<Registry>,
}

impl RequestMetrics {
    /// Create an empty registry whose series carry `service` as a label.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            registry: RwLock::new(Registry::default()),
        }
    }

    /// Record one finished request.
    pub async fn observe(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let key = RouteKey {
            method: method.to_owned(),
            path: path.to_owned(),
        };
        let mut registry = self.registry.write().await;
        let counter = registry.requests.entry((key.clone(), status)).or_insert(0);
        *counter = counter.saturating_add(1);
        registry
            .latency
            .entry(key)
            .or_default()
            .observe(elapsed.as_secs_f64());
    }

    /// Number of requests recorded for `(method, path, status)`.
    pub async fn request_count(&self, method: &str, path: &str, status: u16) -> u64 {
        let key = RouteKey {
            method: method.to_owned(),
            path: path.to_owned(),
        };
        self.registry
            .read()
            .await
            .requests
            .get(&(key, status))
            .copied()
            .unwrap_or(0)
    }

    /// Render all series in Prometheus text format.
    pub async fn render(&self) -> String {
        let registry = self.registry.read().await;
        let service = escape_label(&self.service);
        let mut out = String::with_capacity(1024);

        out.push_str("# HELP http_requests_total Total HTTP requests\n");
        out.push_str("# TYPE http_requests_total counter\n");
        for ((key, status), count) in &registry.requests {
            let _ = writeln!(
                out,
                "http_requests_total{{service=\"{service}\",method=\"{}\",path=\"{}\",status_code=\"{status}\"}} {count}",
                escape_label(&key.method),
                escape_label(&key.path),
            );
        }

        out.push_str("# HELP http_request_duration_seconds HTTP request latency\n");
        out.push_str("# TYPE http_request_duration_seconds histogram\n");
        for (key, hist) in &registry.latency {
            let labels = format!(
                "service=\"{service}\",method=\"{}\",path=\"{}\"",
                escape_label(&key.method),
                escape_label(&key.path),
            );
            for (le, count) in BUCKET_LABELS.iter().zip(hist.buckets.iter()) {
                let _ = writeln!(
                    out,
                    "http_request_duration_seconds_bucket{{{labels},le=\"{le}\"}} {count}"
                );
            }
            let _ = writeln!(
                out,
                "http_request_duration_seconds_bucket{{{labels},le=\"+Inf\"}} {}",
                hist.count
            );
            let _ = writeln!(out, "http_request_duration_seconds_sum{{{labels}}} {}", hist.sum);
            let _ = writeln!(out, "http_request_duration_seconds_count{{{labels}}} {}", hist.count);
        }

        out
    }
}

/// Escape a Prometheus label value.
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
