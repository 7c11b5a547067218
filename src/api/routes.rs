//! HTTP API route composition.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{root, AppState};
use super::{v1, v2};
use crate::config::{ApiVersion, Config};

/// Create the gateway router.
///
/// The route table is built once, before the listener starts: the root
/// route first, then each version router named in `APP_API_VERSIONS`, then
/// the CORS and trace layers applied uniformly to everything above.
pub fn create_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new().route("/", get(root));

    for version in &config.app_api_versions {
        router = match version {
            ApiVersion::V1 => v1::mount(router),
            ApiVersion::V2 => v2::mount(router),
        };
    }

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive cross-origin policy: any origin, method, and header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_config(versions: Vec<ApiVersion>) -> Config {
        Config {
            app_host: "0.0.0.0".to_string(),
            app_port: 6644,
            app_debug: false,
            app_api_versions: versions,
            sentry_dsn: None,
        }
    }

    fn test_router(versions: Vec<ApiVersion>) -> Router {
        let config = test_config(versions);
        create_router(AppState::new(&config), &config)
    }

    #[tokio::test]
    async fn root_returns_ok() {
        let app = test_router(vec![ApiVersion::V2]);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn responses_carry_permissive_cors_header() {
        let app = test_router(vec![ApiVersion::V2]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn v2_routes_are_mounted_by_default() {
        let app = test_router(vec![ApiVersion::V2]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v2/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn v1_routes_are_not_found_by_default() {
        let app = test_router(vec![ApiVersion::V2]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn v1_routes_resolve_when_enabled() {
        let app = test_router(vec![ApiVersion::V1, ApiVersion::V2]);

        let response = app
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

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let app = test_router(vec![ApiVersion::V2]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v3/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
