//! Version 1 API router.
//!
//! Deprecated for security reasons. The module stays implemented so that
//! re-enabling it is a configuration change (`APP_API_VERSIONS=v1,v2`), but
//! it is not part of the default mount set and its routes return 404 on a
//! stock deployment.

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::handlers::{health, AppState};

/// Mount the v1 routes onto the application router.
pub fn mount(app: Router<AppState>) -> Router<AppState> {
    app.nest("/api/v1", router())
}

fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// Version index response.
#[derive(Debug, Serialize)]
struct VersionInfo {
    /// Version identifier.
    version: &'static str,
    /// Whether this version is deprecated.
    deprecated: bool,
    /// Version clients should migrate to.
    successor: &'static str,
}

/// Version index handler - advertises the deprecation.
async fn index() -> impl IntoResponse {
    Json(VersionInfo {
        version: "v1",
        deprecated: true,
        successor: "v2",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, Config};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            app_host: "0.0.0.0".to_string(),
            app_port: 6644,
            app_debug: false,
            app_api_versions: vec![ApiVersion::V1],
            sentry_dsn: None,
        };
        mount(Router::new()).with_state(AppState::new(&config))
    }

    #[tokio::test]
    async fn index_advertises_deprecation() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["version"], "v1");
        assert_eq!(json["deprecated"], true);
        assert_eq!(json["successor"], "v2");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
