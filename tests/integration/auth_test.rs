//! Integration tests for the celebrant auth flow.

use http::StatusCode;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_register_issues_tokens() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "Passw0rd!",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body.get("token").is_some());
    assert_eq!(
        response.body.pointer("/user/email").and_then(|v| v.as_str()),
        Some("a@x.com")
    );
    assert!(response.cookie("refresh_token").is_some());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register("dup@x.com", "Passw0rd!").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "email": "dup@x.com",
                "password": "Passw0rd!",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("AUTH_EMAIL_ALREADY_EXISTS")
    );
}

#[tokio::test]
async fn test_register_weak_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "email": "weak@x.com",
                "password": "password",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(helpers::error_code(&response.body), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_login_success_and_wrong_password() {
    let app = TestApp::new().await;
    app.register("login@x.com", "Passw0rd!").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "login@x.com",
                "password": "Passw0rd!",
            })),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("token").is_some());

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "login@x.com",
                "password": "WrongPass1!",
            })),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("AUTH_INVALID_CREDENTIALS")
    );
}

#[tokio::test]
async fn test_login_unknown_email_same_failure() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "nobody@x.com",
                "password": "Passw0rd!",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("AUTH_INVALID_CREDENTIALS")
    );
}

#[tokio::test]
async fn test_refresh_rotates_and_invalidates_previous() {
    let app = TestApp::new().await;
    let (_token, old_cookie) = app.register("rotate@x.com", "Passw0rd!").await;

    // First refresh succeeds and sets a new cookie.
    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, Some(&old_cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body.get("token").is_some());
    let new_cookie = response.cookie("refresh_token").expect("rotated cookie");
    assert_ne!(old_cookie, new_cookie);

    // The previous refresh credential no longer authorizes a second call.
    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, Some(&old_cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(helpers::error_code(&response.body), Some("AUTH_TOKEN_EXPIRED"));

    // The rotated credential still works.
    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, Some(&new_cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_cookie_fails() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(helpers::error_code(&response.body), Some("AUTH_TOKEN_EXPIRED"));
}

#[tokio::test]
async fn test_celebrant_routes_require_bearer_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/lists", None, None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(helpers::error_code(&response.body), Some("UNAUTHORIZED"));
}
