//! Health check handler.

use axum::Json;
use serde_json::{Value, json};

/// GET /api/v1/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
