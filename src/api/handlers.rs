//! HTTP API handlers shared across versions.

use std::time::Instant;

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::config::Config;

/// Service name reported by the root route.
pub const SERVICE_NAME: &str = "wearables-gateway";

/// Current primary API version reported by the root route.
pub const SERVICE_VERSION: &str = "v2";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// When the gateway started serving.
    pub started_at: Instant,
    /// Whether verbose/development mode is on.
    pub debug: bool,
}

impl AppState {
    /// Create app state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            started_at: Instant::now(),
            debug: config.app_debug,
        }
    }

    /// Seconds since the gateway started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Root informational payload.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Gateway identifier.
    pub service: &'static str,
    /// Primary API version.
    pub version: &'static str,
    /// Advertised entry points.
    pub endpoints: Vec<&'static str>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Root handler - fixed informational payload, always 200.
///
/// The payload is a constant: it advertises the primary version regardless
/// of which routers are actually mounted.
pub async fn root() -> impl IntoResponse {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        endpoints: vec!["/api/v2/"],
    })
}
