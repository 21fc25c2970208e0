//! Integration tests for list management and slug derivation.

use http::StatusCode;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_create_list_derives_slug() {
    let app = TestApp::new().await;
    let (token, _) = app.register("slug@x.com", "Passw0rd!").await;

    let list = app.create_list(&token, "Birthday").await;
    assert_eq!(list.get("slug").and_then(|v| v.as_str()), Some("birthday"));

    let list = app.create_list(&token, "My Wedding List").await;
    assert_eq!(
        list.get("slug").and_then(|v| v.as_str()),
        Some("my-wedding-list")
    );
}

#[tokio::test]
async fn test_slug_collision_appends_hex_suffix() {
    let app = TestApp::new().await;
    let (token, _) = app.register("collide@x.com", "Passw0rd!").await;

    let first = app.create_list(&token, "Birthday").await;
    assert_eq!(first.get("slug").and_then(|v| v.as_str()), Some("birthday"));

    let second = app.create_list(&token, "Birthday").await;
    let slug = second
        .get("slug")
        .and_then(|v| v.as_str())
        .expect("slug present");
    assert_ne!(slug, "birthday");
    let suffix = slug.strip_prefix("birthday-").expect("suffixed slug");
    assert_eq!(suffix.len(), 6);
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    );
}

#[tokio::test]
async fn test_dashboard_lists_only_own_lists() {
    let app = TestApp::new().await;
    let (token_a, _) = app.register("owner-a@x.com", "Passw0rd!").await;
    let (token_b, _) = app.register("owner-b@x.com", "Passw0rd!").await;

    app.create_list(&token_a, "Birthday").await;
    app.create_list(&token_b, "Wedding").await;

    let response = app
        .request("GET", "/api/v1/lists", None, Some(&token_a), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let lists = response.body.as_array().expect("array");
    assert_eq!(lists.len(), 1);
    assert_eq!(
        lists[0].get("name").and_then(|v| v.as_str()),
        Some("Birthday")
    );
}

#[tokio::test]
async fn test_manage_view_requires_ownership() {
    let app = TestApp::new().await;
    let (token_a, _) = app.register("manage-a@x.com", "Passw0rd!").await;
    let (token_b, _) = app.register("manage-b@x.com", "Passw0rd!").await;

    app.create_list(&token_a, "Birthday").await;

    // The owner sees it.
    let response = app
        .request(
            "GET",
            "/api/v1/lists/birthday/manage",
            None,
            Some(&token_a),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Anyone else gets the same 404 a missing list would produce.
    let response = app
        .request(
            "GET",
            "/api/v1/lists/birthday/manage",
            None,
            Some(&token_b),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(helpers::error_code(&response.body), Some("LIST_NOT_FOUND"));
}

#[tokio::test]
async fn test_update_list_partial() {
    let app = TestApp::new().await;
    let (token, _) = app.register("update@x.com", "Passw0rd!").await;
    app.create_list(&token, "Birthday").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/lists/birthday/manage",
            Some(serde_json::json!({ "imageUrl": "https://x.com/cake.png" })),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.get("name").and_then(|v| v.as_str()),
        Some("Birthday")
    );
    assert_eq!(
        response.body.get("imageUrl").and_then(|v| v.as_str()),
        Some("https://x.com/cake.png")
    );
}

#[tokio::test]
async fn test_soft_delete_hides_list() {
    let app = TestApp::new().await;
    let (token, _) = app.register("delete@x.com", "Passw0rd!").await;
    let list = app.create_list(&token, "Birthday").await;
    let list_id = list.get("id").and_then(|v| v.as_str()).expect("id");

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/lists/{list_id}"),
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", "/api/v1/lists", None, Some(&token), None)
        .await;
    assert_eq!(response.body.as_array().expect("array").len(), 0);

    // The row survives as a soft delete.
    let (deleted,): (Option<chrono::DateTime<chrono::Utc>>,) =
        sqlx::query_as("SELECT deleted_at FROM gift_lists WHERE id = $1::uuid")
            .bind(list_id)
            .fetch_one(&app.db_pool)
            .await
            .expect("row still present");
    assert!(deleted.is_some());
}

#[tokio::test]
async fn test_create_list_validates_name() {
    let app = TestApp::new().await;
    let (token, _) = app.register("valid@x.com", "Passw0rd!").await;

    let response = app
        .request(
            "POST",
            "/api/v1/lists",
            Some(serde_json::json!({ "name": "ab" })),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(helpers::error_code(&response.body), Some("VALIDATION_ERROR"));
}
