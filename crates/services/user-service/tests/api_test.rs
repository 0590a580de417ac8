//! HTTP endpoint tests driven through the router without a socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::JwtConfig;
use user_service_lib::build_services;
use user_service_lib::http::{create_router, AppState};
use user_service_lib::repository::InMemoryUserStore;

fn app() -> Router {
    let jwt = JwtConfig {
        secret: "api-test-secret-that-is-at-least-32-bytes".to_string(),
        expiration_hours: 1,
    };
    let services = build_services(Arc::new(InMemoryUserStore::new()), &jwt);
    create_router(AppState::new(services))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn register(app: &Router, username: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/users/register",
        Some(json!({
            "username": username,
            "name": "Test User",
            "email": "test@test.com",
            "contact_no": "12345678",
            "password": "password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["payload"].clone()
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Y");
}

#[tokio::test]
async fn register_returns_user_without_hash() {
    let app = app();

    let user = register(&app, "user001").await;

    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "user001");
    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn register_rejects_taken_username() {
    let app = app();
    register(&app, "user001").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({
            "username": "user001",
            "name": "Other",
            "email": "other@test.com",
            "contact_no": "0",
            "password": "password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["result"], "N");
    assert_eq!(body["code"], "CONFLICT");

    let (_, list) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(list["payload"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn login_returns_user_and_token() {
    let app = app();
    register(&app, "user001").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({"username": "user001", "password": "password"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Y");
    assert_eq!(body["payload"]["username"], "user001");
    assert!(!body["payload"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = app();
    register(&app, "user001").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({"username": "user001", "password": "wrong"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["result"], "N");
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert!(body.get("payload").is_none());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (status, body) = send(&app(), Method::GET, "/users/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["result"], "N");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_profile_overwrites_fields() {
    let app = app();
    register(&app, "user001").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({
            "name": "Changed Name",
            "email": "new_email@test.com",
            "contact_no": "99998888",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["name"], "Changed Name");
    assert_eq!(body["payload"]["email"], "new_email@test.com");
    assert_eq!(body["payload"]["contact_no"], "99998888");
    assert_eq!(body["payload"]["username"], "user001");
}

#[tokio::test]
async fn change_password_enables_new_login() {
    let app = app();
    register(&app, "user001").await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/1/password",
        Some(json!({"password": "new_password"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({"username": "user001", "password": "new_password"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_returns_remaining_users() {
    let app = app();
    register(&app, "user001").await;
    register(&app, "user002").await;

    let (status, body) = send(&app, Method::DELETE, "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    let remaining = body["payload"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], 2);

    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
