//! Server configuration for the ScaleDown web front-end.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `SCALEDOWN_*` environment variables.

use std::net::SocketAddr;

/// Port used when neither `SCALEDOWN_BIND_ADDR` nor `PORT` is set.
const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Service name reported by `/health` and used as the metrics `service` label.
    pub service_name: String,
    /// Deployment environment (`dev`, `staging`, `prod`, ...).
    pub environment: String,
    /// Variables that were set but could not be parsed. Reported once
    /// logging is up, since config is read before the subscriber exists.
    pub rejected: Vec<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `SCALEDOWN_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `SCALEDOWN_LOG_LEVEL` — log filter (default: `info`)
    /// - `SCALEDOWN_SERVICE_NAME` — service label (default: `scaledown-web`)
    /// - `SCALEDOWN_ENVIRONMENT` — environment label (default: `dev`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        let fallback = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));

        // Priority: SCALEDOWN_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = lookup("SCALEDOWN_BIND_ADDR") {
            addr.parse().unwrap_or_else(|_| {
                rejected.push(format!("SCALEDOWN_BIND_ADDR={addr}"));
                fallback
            })
        } else if let Some(port_str) = lookup("PORT") {
            match port_str.parse::<u16>() {
                Ok(port) => SocketAddr::from(([0, 0, 0, 0], port)),
                Err(_) => {
                    rejected.push(format!("PORT={port_str}"));
                    fallback
                }
            }
        } else {
            fallback
        };

        let log_level = lookup("SCALEDOWN_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let service_name = lookup("SCALEDOWN_SERVICE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "scaledown-web".to_owned());

        let environment = lookup("SCALEDOWN_ENVIRONMENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "dev".to_owned());

        Self {
            bind_addr,
            log_level,
            service_name,
            environment,
            rejected,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
