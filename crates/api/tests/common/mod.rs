#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use blogsphere_api::auth::jwt::JwtConfig;
use blogsphere_api::config::{DeploymentMode, ServerConfig, StoreConfig};
use blogsphere_api::router::build_app_router;
use blogsphere_api::state::AppState;
use blogsphere_db::{InMemoryDocumentStore, SharedStore};

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        mode: DeploymentMode::Development,
        cors_origins: vec![
            "http://localhost:5173".to_string(),
            "http://localhost:5174".to_string(),
        ],
        request_timeout_secs: 30,
        require_auth_for_writes: false,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            session_ttl_days: 365,
        },
        store: StoreConfig::Memory,
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

/// Same as [`build_test_app`] with a custom configuration.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    let store: SharedStore = Arc::new(InMemoryDocumentStore::new());
    build_app_router(AppState {
        store,
        config: Arc::new(config),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_with_cookie(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The raw `Set-Cookie` header of a response.
pub fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap()
        .to_string()
}

/// Turn a `Set-Cookie` value into the `name=value` a browser would send back.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().trim().to_string()
}

/// Log in through `POST /jwt` and return the `Cookie` header value.
pub async fn login(app: &Router, identity: serde_json::Value) -> String {
    let response = post_json(app, "/jwt", identity).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    cookie_pair(&set_cookie(&response))
}

/// Insert a document through `uri` and return its id.
pub async fn insert(app: &Router, uri: &str, body: serde_json::Value) -> String {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["insertedId"]
        .as_str()
        .expect("insert should return insertedId")
        .to_string()
}
