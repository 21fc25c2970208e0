//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use wishhub_auth::guest::GuestTokenIssuer;
use wishhub_auth::jwt::{JwtDecoder, JwtEncoder};
use wishhub_auth::password::{PasswordHasher, PasswordValidator};
use wishhub_core::config::AppConfig;
use wishhub_core::traits::NotificationDispatcher;
use wishhub_database::repositories::{
    CelebrantRepository, ClaimRepository, GuestAccessRepository, ItemRepository, ListRepository,
};
use wishhub_service::account::AccountService;
use wishhub_service::claim::ClaimEngine;
use wishhub_service::guest::GuestService;
use wishhub_service::item::ItemService;
use wishhub_service::list::ListService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Celebrant JWT encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Celebrant JWT decoder
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Guest session token issuer
    pub guest_tokens: Arc<GuestTokenIssuer>,
    /// Password hasher (Argon2id)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// Celebrant repository
    pub celebrant_repo: Arc<CelebrantRepository>,
    /// List repository
    pub list_repo: Arc<ListRepository>,
    /// Item repository
    pub item_repo: Arc<ItemRepository>,
    /// Guest access repository
    pub guest_repo: Arc<GuestAccessRepository>,
    /// Claim repository
    pub claim_repo: Arc<ClaimRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account service
    pub account_service: Arc<AccountService>,
    /// List service
    pub list_service: Arc<ListService>,
    /// Item service
    pub item_service: Arc<ItemService>,
    /// Guest service
    pub guest_service: Arc<GuestService>,
    /// Claim engine
    pub claim_engine: Arc<ClaimEngine>,
}

impl AppState {
    /// Wire up repositories and services over a connected pool.
    ///
    /// The notification dispatcher is injected so the binary can pass the
    /// mail relay while tests pass a recorder.
    pub fn build(
        config: AppConfig,
        db_pool: PgPool,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        let celebrant_repo = Arc::new(CelebrantRepository::new(db_pool.clone()));
        let list_repo = Arc::new(ListRepository::new(db_pool.clone()));
        let item_repo = Arc::new(ItemRepository::new(db_pool.clone()));
        let guest_repo = Arc::new(GuestAccessRepository::new(db_pool.clone()));
        let claim_repo = Arc::new(ClaimRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let guest_tokens = Arc::new(GuestTokenIssuer::new(&config.guest));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&celebrant_repo),
            Arc::clone(&password_hasher),
            PasswordValidator::new(&config.auth),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
        ));
        let list_service = Arc::new(ListService::new(
            Arc::clone(&list_repo),
            Arc::clone(&item_repo),
        ));
        let item_service = Arc::new(ItemService::new(
            Arc::clone(&list_repo),
            Arc::clone(&item_repo),
            Arc::clone(&claim_repo),
            Arc::clone(&dispatcher),
        ));
        let guest_service = Arc::new(GuestService::new(
            Arc::clone(&list_repo),
            Arc::clone(&item_repo),
            Arc::clone(&guest_repo),
            Arc::clone(&guest_tokens),
        ));
        let claim_engine = Arc::new(ClaimEngine::new(
            Arc::clone(&item_repo),
            Arc::clone(&claim_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            guest_tokens,
            password_hasher,
            celebrant_repo,
            list_repo,
            item_repo,
            guest_repo,
            claim_repo,
            account_service,
            list_service,
            item_service,
            guest_service,
            claim_engine,
        }
    }
}
