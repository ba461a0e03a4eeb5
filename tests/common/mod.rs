use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shopfront::router::init_router;
use shopfront::shopfront_config::JwtConfig;
use shopfront::state::AppState;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_JWT_SECRET, "2h")
}

/// Router over fresh in-memory repositories.
pub fn setup_test_app() -> Router {
    init_router(AppState::in_memory(&jwt_config()))
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4())
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends the request and decodes the JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

/// Registers a user and returns `(token, response body)`.
pub async fn register_user(app: &Router, email: &str, password: &str) -> (String, Value) {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            json!({ "name": "Test User", "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    let token = body["token"].as_str().unwrap().to_string();
    (token, body)
}

#[allow(dead_code)]
pub async fn create_category(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/categories",
            json!({ "name": name, "available": true }),
            Some(token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create category failed: {body}");
    body["id"].as_str().unwrap().to_string()
}
