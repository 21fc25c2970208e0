//! Integration tests for the claim engine: lifecycle, exclusivity, and
//! the status⇔claim invariant under concurrency.

use futures::future::join_all;
use http::StatusCode;

use crate::helpers::{self, TestApp};

/// Assert the central invariant for one item:
/// `status == 'claimed'` iff a claims row exists.
async fn assert_invariant(app: &TestApp, item_id: &str) {
    let (status, claim_count): (String, i64) = sqlx::query_as(
        "SELECT i.status::text, COUNT(c.id) FROM gift_items i \
         LEFT JOIN claims c ON c.item_id = i.id \
         WHERE i.id = $1::uuid GROUP BY i.status",
    )
    .bind(item_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("invariant query");

    match status.as_str() {
        "claimed" => assert_eq!(claim_count, 1, "claimed item must have exactly one claim"),
        "available" => assert_eq!(claim_count, 0, "available item must have no claim"),
        other => panic!("unexpected status {other}"),
    }
}

async fn setup_list_with_item(app: &TestApp) -> (String, String) {
    let (token, _) = app.register("celebrant@x.com", "Passw0rd!").await;
    let list = app.create_list(&token, "Birthday").await;
    let list_id = list.get("id").and_then(|v| v.as_str()).expect("list id");
    let item = app.add_item(&token, list_id, "Camera").await;
    let item_id = item
        .get("id")
        .and_then(|v| v.as_str())
        .expect("item id")
        .to_string();
    (token, item_id)
}

#[tokio::test]
async fn test_claim_lifecycle() {
    let app = TestApp::new().await;
    let (_token, item_id) = setup_list_with_item(&app).await;
    let guest = app.grant_access("birthday", "g@x.com", "en").await;

    let response = app.claim(&guest, &item_id).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.get("status").and_then(|v| v.as_str()),
        Some("CLAIMED")
    );
    assert_invariant(&app, &item_id).await;

    let response = app.unclaim(&guest, &item_id).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("status").and_then(|v| v.as_str()),
        Some("AVAILABLE")
    );
    assert_invariant(&app, &item_id).await;
}

#[tokio::test]
async fn test_second_claim_conflicts_even_for_same_guest() {
    let app = TestApp::new().await;
    let (_token, item_id) = setup_list_with_item(&app).await;
    let guest_a = app.grant_access("birthday", "a@guests.com", "en").await;
    let guest_b = app.grant_access("birthday", "b@guests.com", "en").await;

    assert_eq!(app.claim(&guest_a, &item_id).await.status, StatusCode::OK);

    // Another guest conflicts.
    let response = app.claim(&guest_b, &item_id).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("ITEM_ALREADY_CLAIMED")
    );

    // So does the holder: a repeat claim is not idempotent.
    let response = app.claim(&guest_a, &item_id).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_invariant(&app, &item_id).await;
}

#[tokio::test]
async fn test_unclaim_by_non_holder_forbidden() {
    let app = TestApp::new().await;
    let (_token, item_id) = setup_list_with_item(&app).await;
    let guest_a = app.grant_access("birthday", "a@guests.com", "en").await;
    let guest_b = app.grant_access("birthday", "b@guests.com", "en").await;

    assert_eq!(app.claim(&guest_a, &item_id).await.status, StatusCode::OK);

    let response = app.unclaim(&guest_b, &item_id).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("ITEM_NOT_CLAIMED_BY_YOU")
    );

    // The claim is untouched.
    assert_invariant(&app, &item_id).await;
    let response = app.unclaim(&guest_a, &item_id).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unclaim_twice_fails_second_time() {
    let app = TestApp::new().await;
    let (_token, item_id) = setup_list_with_item(&app).await;
    let guest = app.grant_access("birthday", "g@x.com", "en").await;

    assert_eq!(app.claim(&guest, &item_id).await.status, StatusCode::OK);
    assert_eq!(app.unclaim(&guest, &item_id).await.status, StatusCode::OK);

    let response = app.unclaim(&guest, &item_id).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(helpers::error_code(&response.body), Some("ITEM_NOT_CLAIMED"));
    assert_invariant(&app, &item_id).await;
}

#[tokio::test]
async fn test_claim_missing_item_not_found() {
    let app = TestApp::new().await;
    let (_token, _item_id) = setup_list_with_item(&app).await;
    let guest = app.grant_access("birthday", "g@x.com", "en").await;

    let response = app.claim(&guest, &uuid::Uuid::new_v4().to_string()).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(helpers::error_code(&response.body), Some("ITEM_NOT_FOUND"));
}

#[tokio::test]
async fn test_claim_requires_guest_session() {
    let app = TestApp::new().await;
    let (_token, item_id) = setup_list_with_item(&app).await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/items/{item_id}/claim"),
            None,
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        helpers::error_code(&response.body),
        Some("UNAUTHORIZED_GUEST")
    );
}

#[tokio::test]
async fn test_concurrent_claims_yield_exactly_one_winner() {
    const GUESTS: usize = 50;

    let app = TestApp::new().await;
    let (_token, item_id) = setup_list_with_item(&app).await;

    let mut cookies = Vec::with_capacity(GUESTS);
    for n in 0..GUESTS {
        cookies.push(
            app.grant_access("birthday", &format!("guest{n}@x.com"), "en")
                .await,
        );
    }

    let attempts = cookies
        .iter()
        .map(|cookie| app.claim(cookie, &item_id))
        .collect::<Vec<_>>();
    let results = join_all(attempts).await;

    let successes = results
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    let conflicts = results
        .iter()
        .filter(|r| {
            r.status == StatusCode::CONFLICT
                && helpers::error_code(&r.body) == Some("ITEM_ALREADY_CLAIMED")
        })
        .count();

    assert_eq!(successes, 1, "exactly one concurrent claim may win");
    assert_eq!(conflicts, GUESTS - 1, "all losers see ITEM_ALREADY_CLAIMED");
    assert_invariant(&app, &item_id).await;
}
