mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    generate_unique_email, get_request, json_request, jwt_config, register_user, send,
    setup_test_app,
};
use serde_json::json;
use shopfront::shopfront_auth::{EmailTokenPayload, JwtAdapter, UserTokenPayload};
use tower::ServiceExt;

#[tokio::test]
async fn test_register_success() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let (token, body) = register_user(&app, &email, "secret123").await;

    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["name"], "Test User");
    assert_eq!(body["user"]["emailValidated"], false);
    assert_eq!(body["user"]["role"], json!(["USER_ROLE"]));
    assert!(body["user"].get("password").is_none());

    let payload: UserTokenPayload = JwtAdapter::new(&jwt_config()).validate_token(&token).unwrap();
    assert_eq!(payload.email, email);
    assert_eq!(payload.id, body["user"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = setup_test_app();
    let email = generate_unique_email();
    register_user(&app, &email, "secret123").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/register",
            json!({ "name": "Other", "email": email, "password": "secret123" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = setup_test_app();

    let cases = [
        (
            json!({ "name": "", "email": "a@b.com", "password": "secret123" }),
            "Name is required",
        ),
        (
            json!({ "name": "Ada", "email": "not-an-email", "password": "secret123" }),
            "Email is not valid",
        ),
        (
            json!({ "name": "Ada", "email": "a@b.com", "password": "123" }),
            "Password too short",
        ),
        (json!({ "email": "a@b.com", "password": "secret123" }), "Missing name"),
    ];

    for (payload, expected) in cases {
        let (status, body) = send(
            &app,
            json_request("POST", "/api/auth/register", payload, None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], expected);
    }
}

#[tokio::test]
async fn test_register_without_content_type() {
    let app = setup_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .body(Body::from(
            r#"{"name":"Ada","email":"a@b.com","password":"secret123"}"#,
        ))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'Content-Type: application/json' header");
}

#[tokio::test]
async fn test_login_success() {
    let app = setup_test_app();
    let email = generate_unique_email();
    register_user(&app, &email, "secret123").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": email, "password": "secret123" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], email);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = setup_test_app();
    let email = generate_unique_email();
    register_user(&app, &email, "secret123").await;

    for (email, password) in [
        (email.as_str(), "wrong-password"),
        ("nobody@test.com", "secret123"),
    ] {
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/auth/login",
                json!({ "email": email, "password": password }),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email or password");
    }
}

#[tokio::test]
async fn test_validate_email_flow() {
    let app = setup_test_app();
    let email = generate_unique_email();
    register_user(&app, &email, "secret123").await;

    let token = JwtAdapter::new(&jwt_config())
        .generate_default(&EmailTokenPayload::new(&email))
        .unwrap();
    let (status, body) = send(
        &app,
        get_request(&format!("/api/auth/validate-email/{}", token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Email validated");

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": email, "password": "secret123" }),
            None,
        ),
    )
    .await;
    assert_eq!(body["user"]["emailValidated"], true);
}

#[tokio::test]
async fn test_validate_email_invalid_token() {
    let app = setup_test_app();

    let (status, body) = send(&app, get_request("/api/auth/validate-email/not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_validate_email_rejects_session_token() {
    let app = setup_test_app();
    let email = generate_unique_email();
    let (session_token, _) = register_user(&app, &email, "secret123").await;

    let (status, body) = send(
        &app,
        get_request(&format!("/api/auth/validate-email/{}", session_token)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": email, "password": "secret123" }),
            None,
        ),
    )
    .await;
    assert_eq!(body["user"]["emailValidated"], false);
}

#[tokio::test]
async fn test_validate_email_unknown_address() {
    let app = setup_test_app();
    let token = JwtAdapter::new(&jwt_config())
        .generate_default(&EmailTokenPayload::new("ghost@test.com"))
        .unwrap();

    let (status, body) = send(
        &app,
        get_request(&format!("/api/auth/validate-email/{}", token)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email not exists");
}

#[tokio::test]
async fn test_health_and_docs() {
    let app = setup_test_app();

    let (status, body) = send(&app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, get_request("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/products").is_some());

    let response = app.clone().oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::CONTENT_TYPE).is_some());
}
