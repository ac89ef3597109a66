//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! on top of a test database pool, plus JWT and request helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use planttracker_api::auth::jwt::{generate_access_token, JwtConfig};
use planttracker_api::config::ServerConfig;
use planttracker_api::router::build_app_router;
use planttracker_api::service::PlantService;
use planttracker_api::state::AppState;
use planttracker_core::clock::SystemClock;
use planttracker_core::roles::{ROLE_ADMIN, ROLE_VIEWER};
use planttracker_db::repositories::PlantRepo;

/// Signing secret used by every test token.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let service = PlantService::new(PlantRepo::new(Arc::new(SystemClock)));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        service,
    };

    build_app_router(state, &config)
}

/// A valid Bearer token carrying the admin role.
pub fn admin_token() -> String {
    generate_access_token("test-admin", ROLE_ADMIN, &test_config().jwt)
        .expect("token generation should succeed")
}

/// A valid Bearer token carrying a non-admin role.
pub fn viewer_token() -> String {
    generate_access_token("test-viewer", ROLE_VIEWER, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, "GET", uri, token, None).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "PUT", uri, token, Some(body)).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "PATCH", uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, "DELETE", uri, token, None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
