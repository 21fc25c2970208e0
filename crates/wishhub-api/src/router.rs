//! Route definitions for the Wishhub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(list_routes())
        .merge(item_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// List endpoints, celebrant-facing and guest-facing
fn list_routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(handlers::list::dashboard))
        .route("/lists", post(handlers::list::create_list))
        .route("/lists/{slug}/manage", get(handlers::list::manage_view))
        .route("/lists/{slug}/manage", put(handlers::list::update_list))
        .route("/lists/{slug}/manage", patch(handlers::list::update_list))
        .route("/lists/{slug}/preview", get(handlers::list::preview))
        .route("/lists/{slug}/access", post(handlers::list::grant_access))
        // Same path shape on purpose: GET resolves the segment as a slug
        // (guest view), DELETE as the list id.
        .route(
            "/lists/{slug}",
            get(handlers::list::public_view).delete(handlers::list::delete_list),
        )
}

/// Item CRUD and claim endpoints
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/list/{list_id}", post(handlers::item::create_item))
        .route("/items/{id}", patch(handlers::item::update_item))
        .route("/items/{id}", delete(handlers::item::delete_item))
        .route("/items/{id}/claim", post(handlers::claim::claim_item))
        .route("/items/{id}/unclaim", post(handlers::claim::unclaim_item))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// CORS with credentials: the refresh and guest-session cookies must be
/// allowed through, so origins are explicit, never a wildcard.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .server
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(
            state.config.server.cors.max_age_seconds,
        ))
}
