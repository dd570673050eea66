use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sipesc::router::init_router;
use sipesc::state::AppState;
use sipesc_config::{CorsConfig, JwtConfig, RoutesConfig};
use sipesc_store::{KeyValueStore, MemoryStore};
use tower::ServiceExt;

#[allow(unused_imports)]
pub use sipesc_models::directory::{
    ADMIN_EMAIL, COUNCILOR_EMAIL, PROSECUTOR_EMAIL, SCHOOL_EMAIL, TEACHER_EMAIL,
};

pub fn test_state() -> AppState {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    AppState::new(
        JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 3600,
        },
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        RoutesConfig::default(),
        store,
    )
}

pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    (init_router(state.clone()), state)
}

/// Sends `request` and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty or non-JSON body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, body)
}

#[allow(dead_code)]
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Logs in as a demo account and returns the bearer token.
#[allow(dead_code)]
pub async fn login(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            &serde_json::json!({ "email": email, "password": "demo" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {email}: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// The `Location` header of a redirect, if any.
#[allow(dead_code)]
pub async fn redirect_location(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (response.status(), location)
}
