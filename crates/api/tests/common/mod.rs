#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kartuli_api::auth::password::hash_password;
use kartuli_api::auth::session::{SessionConfig, SESSION_COOKIE};
use kartuli_api::config::{LogFormat, ServerConfig};
use kartuli_api::router::build_app_router;
use kartuli_api::state::AppState;
use kartuli_core::roles::{ROLE_ADMIN, ROLE_USER};
use kartuli_db::models::user::{CreateUser, UpdateUser, User};
use kartuli_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "qvevri-secret-42";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig::default(),
        seed_catalog: false,
        bootstrap_admin: None,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send one request through the router.
///
/// `headers` are raw `(name, value)` pairs, e.g. `("cookie", &cookie)`.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, &[]).await
}

pub async fn get_with(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    send(app, Method::GET, uri, None, headers).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), &[]).await
}

pub async fn post_json_with(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), headers).await
}

pub async fn put_json_with(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), headers).await
}

pub async fn patch_json_with(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), headers).await
}

pub async fn delete_with(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    send(app, Method::DELETE, uri, None, headers).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and the `{error, code}` body of an error response.
pub async fn assert_error(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["error"], message);
    assert!(json["code"].is_string(), "error body must carry a code");
}

/// The `kartuli_session=<token>` pair from a `Set-Cookie` header, ready to be
/// sent back as a `Cookie` header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(str::to_string)
}

pub fn cookie_header(cookie: &str) -> (&'static str, &str) {
    (COOKIE.as_str(), cookie)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Insert a user directly, with [`TEST_PASSWORD`] as its password.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: Some(format!("{username}@example.ge")),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        first_name: None,
        last_name: None,
        role: role.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

/// Deactivate a user directly, bypassing the API.
pub async fn deactivate_user(pool: &PgPool, id: &str) {
    let input = UpdateUser {
        is_active: Some(false),
        ..Default::default()
    };
    UserRepo::update(pool, id, &input).await.unwrap().unwrap();
}

/// Log in through the API and return the session cookie pair.
pub async fn login(app: Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("login must set the session cookie")
}

/// Create an admin and return `(user, session cookie)`.
pub async fn admin_session(pool: &PgPool, app: Router) -> (User, String) {
    let user = create_user(pool, "tamar_admin", ROLE_ADMIN).await;
    let cookie = login(app, "tamar_admin").await;
    (user, cookie)
}

/// Create a regular user and return `(user, session cookie)`.
pub async fn user_session(pool: &PgPool, app: Router, username: &str) -> (User, String) {
    let user = create_user(pool, username, ROLE_USER).await;
    let cookie = login(app, username).await;
    (user, cookie)
}
