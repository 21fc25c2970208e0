//! Integration tests for surprise protection: view masking, guest
//! session scoping, and the removal notification.

use std::time::Duration;

use http::StatusCode;

use crate::helpers::{self, TestApp};

async fn setup_claimed_item(app: &TestApp) -> (String, String) {
    let (token, _) = app.register("celebrant@x.com", "Passw0rd!").await;
    let list = app.create_list(&token, "Birthday").await;
    let list_id = list.get("id").and_then(|v| v.as_str()).expect("list id");
    app.add_item(&token, list_id, "Camera").await;
    let item = app.add_item(&token, list_id, "Tripod").await;
    let item_id = item
        .get("id")
        .and_then(|v| v.as_str())
        .expect("item id")
        .to_string();
    (token, item_id)
}

#[tokio::test]
async fn test_celebrant_view_masks_claimed_items() {
    let app = TestApp::new().await;
    let (token, item_id) = setup_claimed_item(&app).await;

    let guest = app.grant_access("birthday", "a@guests.com", "en").await;
    assert_eq!(app.claim(&guest, &item_id).await.status, StatusCode::OK);

    for path in ["/api/v1/lists", "/api/v1/lists/birthday/manage"] {
        let response = app.request("GET", path, None, Some(&token), None).await;
        assert_eq!(response.status, StatusCode::OK);

        let items = if response.body.is_array() {
            response.body[0]["items"].clone()
        } else {
            response.body["items"].clone()
        };
        let items = items.as_array().expect("items array");

        // Both items present, every status AVAILABLE, no claim identity
        // anywhere in the payload.
        assert_eq!(items.len(), 2);
        for item in items {
            assert_eq!(item.get("status").and_then(|v| v.as_str()), Some("AVAILABLE"));
            let keys: Vec<&str> = item
                .as_object()
                .expect("object")
                .keys()
                .map(String::as_str)
                .collect();
            assert!(
                !keys
                    .iter()
                    .any(|k| k.to_lowercase().contains("claim") || k.to_lowercase().contains("guest")),
                "celebrant view leaked claim fields: {keys:?}"
            );
        }
    }
}

#[tokio::test]
async fn test_guest_views_matrix() {
    let app = TestApp::new().await;
    let (_token, item_id) = setup_claimed_item(&app).await;

    let guest_a = app.grant_access("birthday", "a@guests.com", "en").await;
    let guest_b = app.grant_access("birthday", "b@guests.com", "en").await;
    assert_eq!(app.claim(&guest_a, &item_id).await.status, StatusCode::OK);

    // Guest A sees both items, the claimed one flagged as theirs.
    let response = app
        .request("GET", "/api/v1/lists/birthday", None, None, Some(&guest_a))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    let claimed = items
        .iter()
        .find(|i| i.get("id").and_then(|v| v.as_str()) == Some(item_id.as_str()))
        .expect("own claim visible");
    assert_eq!(claimed.get("isClaimedByMe").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(claimed.get("status").and_then(|v| v.as_str()), Some("CLAIMED"));

    // Guest B's view omits the claimed item entirely.
    let response = app
        .request("GET", "/api/v1/lists/birthday", None, None, Some(&guest_b))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert!(
        items
            .iter()
            .all(|i| i.get("id").and_then(|v| v.as_str()) != Some(item_id.as_str()))
    );
}

#[tokio::test]
async fn test_guest_session_is_list_scoped() {
    let app = TestApp::new().await;
    let (token, _) = app.register("two-lists@x.com", "Passw0rd!").await;
    app.create_list(&token, "Birthday").await;
    app.create_list(&token, "Wedding").await;

    let guest = app.grant_access("birthday", "g@x.com", "en").await;

    // Replaying the birthday session against the wedding list fails like
    // an absent session, leaking nothing.
    let response = app
        .request("GET", "/api/v1/lists/wedding", None, None, Some(&guest))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("UNAUTHORIZED_GUEST")
    );
    assert!(response.body.get("items").is_none());
}

#[tokio::test]
async fn test_public_view_without_session_prompts_for_access() {
    let app = TestApp::new().await;
    let (token, _) = app.register("prompt@x.com", "Passw0rd!").await;
    app.create_list(&token, "Birthday").await;

    let response = app
        .request("GET", "/api/v1/lists/birthday", None, None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("UNAUTHORIZED_GUEST")
    );
}

#[tokio::test]
async fn test_owner_preview_hides_claims_and_cannot_claim() {
    let app = TestApp::new().await;
    let (token, item_id) = setup_claimed_item(&app).await;

    let guest = app.grant_access("birthday", "a@guests.com", "en").await;
    assert_eq!(app.claim(&guest, &item_id).await.status, StatusCode::OK);

    // Preview renders the guest projection: the claimed item is absent
    // and nothing is flagged as claimed-by-me.
    let response = app
        .request(
            "GET",
            "/api/v1/lists/birthday/preview",
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let items = response.body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert!(
        items
            .iter()
            .all(|i| i.get("isClaimedByMe").and_then(|v| v.as_bool()) == Some(false))
    );

    // The bearer token is no claim capability.
    let response = app
        .request(
            "POST",
            &format!("/api/v1/items/{item_id}/claim"),
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_claimed_item_notifies_guest_once() {
    let app = TestApp::new().await;
    let (token, item_id) = setup_claimed_item(&app).await;

    let guest = app.grant_access("birthday", "g@x.com", "it").await;
    assert_eq!(app.claim(&guest, &item_id).await.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/items/{item_id}"),
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // The notice is dispatched on a spawned task; poll briefly.
    let mut sent = app.dispatcher.sent();
    for _ in 0..50 {
        if !sent.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        sent = app.dispatcher.sent();
    }

    assert_eq!(sent.len(), 1, "exactly one removal notice");
    assert_eq!(sent[0].email, "g@x.com");
    assert_eq!(sent[0].item_name, "Tripod");
    assert_eq!(sent[0].list_name, "Birthday");
    assert_eq!(sent[0].language, "it");

    // The item is gone from both views.
    let response = app
        .request("GET", "/api/v1/lists/birthday", None, None, Some(&guest))
        .await;
    let items = response.body["items"].as_array().expect("items");
    assert!(
        items
            .iter()
            .all(|i| i.get("id").and_then(|v| v.as_str()) != Some(item_id.as_str()))
    );

    let response = app
        .request(
            "GET",
            "/api/v1/lists/birthday/manage",
            None,
            Some(&token),
            None,
        )
        .await;
    let items = response.body["items"].as_array().expect("items");
    assert!(
        items
            .iter()
            .all(|i| i.get("id").and_then(|v| v.as_str()) != Some(item_id.as_str()))
    );
}

#[tokio::test]
async fn test_deleting_unclaimed_item_sends_no_notice() {
    let app = TestApp::new().await;
    let (token, item_id) = setup_claimed_item(&app).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/items/{item_id}"),
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(app.dispatcher.sent().is_empty());
}
