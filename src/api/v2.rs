//! Version 2 API router.
//!
//! The active version. Registers its routes under `/api/v2` when mounted by
//! [`routes::create_router`](super::routes::create_router).

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::handlers::{health, AppState};

/// Mount the v2 routes onto the application router.
pub fn mount(app: Router<AppState>) -> Router<AppState> {
    app.nest("/api/v2", router())
}

fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/status", get(status))
}

/// Version index response.
#[derive(Debug, Serialize)]
struct VersionInfo {
    /// Version identifier.
    version: &'static str,
    /// Whether this version is deprecated.
    deprecated: bool,
    /// Routes registered under this version.
    routes: Vec<&'static str>,
}

/// Gateway status response.
#[derive(Debug, Serialize)]
struct StatusResponse {
    /// Version identifier.
    version: &'static str,
    /// Seconds since the gateway started.
    uptime_seconds: u64,
    /// Whether verbose/development mode is on.
    debug: bool,
}

/// Version index handler.
async fn index() -> impl IntoResponse {
    Json(VersionInfo {
        version: "v2",
        deprecated: false,
        routes: vec!["/api/v2/", "/api/v2/health", "/api/v2/status"],
    })
}

/// Status handler - uptime and mode.
async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        version: "v2",
        uptime_seconds: state.uptime_seconds(),
        debug: state.debug,
    })
}
