//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use wishhub_core::config::AppConfig;
use wishhub_core::traits::NotificationDispatcher;
use wishhub_service::notify::RecordingDispatcher;

/// Serializes tests against the shared test database.
static DB_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Records removal notices instead of mailing them
    pub dispatcher: Arc<RecordingDispatcher>,
    /// Held for the lifetime of the app so tests run one at a time
    _db_guard: tokio::sync::MutexGuard<'static, ()>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null for empty bodies)
    pub body: Value,
    /// Raw Set-Cookie header values
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// Extract the `name=value` pair for a cookie set by this response.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.set_cookies
            .iter()
            .filter_map(|raw| raw.split(';').next())
            .find(|pair| pair.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }
}

impl TestApp {
    /// Create a new test application on a clean database.
    pub async fn new() -> Self {
        let db_guard = DB_LOCK.lock().await;

        let config = AppConfig::load_from("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db = wishhub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        wishhub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.into_pool();
        Self::clean_database(&db_pool).await;

        let dispatcher = Arc::new(RecordingDispatcher::new());
        let state = wishhub_api::AppState::build(
            config,
            db_pool.clone(),
            Arc::clone(&dispatcher) as Arc<dyn NotificationDispatcher>,
        );
        let router = wishhub_api::build_router(state);

        Self {
            router,
            db_pool,
            dispatcher,
            _db_guard: db_guard,
        }
    }

    /// Clean all test data from the database (FK order matters).
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "claims",
            "guest_accesses",
            "gift_items",
            "gift_lists",
            "celebrants",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(cookie) = cookie {
            req = req.header("Cookie", cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }

    /// Register a celebrant; returns (access token, refresh cookie).
    pub async fn register(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Register failed: {:?}",
            response.body
        );

        let token = response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in register response")
            .to_string();
        let cookie = response
            .cookie("refresh_token")
            .expect("No refresh cookie in register response");

        (token, cookie)
    }

    /// Create a list; returns the response body.
    pub async fn create_list(&self, token: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/v1/lists",
                Some(serde_json::json!({ "name": name })),
                Some(token),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create list failed: {:?}",
            response.body
        );
        response.body
    }

    /// Add an item to a list; returns the response body.
    pub async fn add_item(&self, token: &str, list_id: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/items/list/{list_id}"),
                Some(serde_json::json!({ "name": name })),
                Some(token),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Add item failed: {:?}",
            response.body
        );
        response.body
    }

    /// Grant guest access to a list; returns the guest session cookie.
    pub async fn grant_access(&self, slug: &str, email: &str, language: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/lists/{slug}/access"),
                Some(serde_json::json!({ "email": email, "language": language })),
                None,
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Grant access failed: {:?}",
            response.body
        );
        response
            .cookie("guest_session")
            .expect("No guest session cookie")
    }

    /// Claim an item under a guest session.
    pub async fn claim(&self, cookie: &str, item_id: &str) -> TestResponse {
        self.request(
            "POST",
            &format!("/api/v1/items/{item_id}/claim"),
            None,
            None,
            Some(cookie),
        )
        .await
    }

    /// Unclaim an item under a guest session.
    pub async fn unclaim(&self, cookie: &str, item_id: &str) -> TestResponse {
        self.request(
            "POST",
            &format!("/api/v1/items/{item_id}/unclaim"),
            None,
            None,
            Some(cookie),
        )
        .await
    }
}

/// Error code from the uniform envelope.
pub fn error_code(body: &Value) -> Option<&str> {
    body.pointer("/error/code").and_then(|v| v.as_str())
}
