//! Registration, login, and refresh rotation.

use std::sync::Arc;

use tracing::info;

use wishhub_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use wishhub_auth::password::{PasswordHasher, PasswordValidator};
use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_database::repositories::CelebrantRepository;
use wishhub_entity::celebrant::{Celebrant, CreateCelebrant};

/// Result of a successful register or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The authenticated account.
    pub celebrant: Celebrant,
    /// Fresh access + refresh tokens.
    pub tokens: TokenPair,
}

/// Manages celebrant accounts and the refresh-token rotation.
#[derive(Debug, Clone)]
pub struct AccountService {
    celebrant_repo: Arc<CelebrantRepository>,
    hasher: Arc<PasswordHasher>,
    password_validator: PasswordValidator,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        celebrant_repo: Arc<CelebrantRepository>,
        hasher: Arc<PasswordHasher>,
        password_validator: PasswordValidator,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            celebrant_repo,
            hasher,
            password_validator,
            encoder,
            decoder,
        }
    }

    /// Register a new celebrant account and issue its first token pair.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        self.password_validator.validate(password)?;

        if self.celebrant_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::email_already_exists("Email already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let celebrant = self
            .celebrant_repo
            .create(&CreateCelebrant {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(celebrant_id = %celebrant.id, "Celebrant registered");

        self.issue_and_store(celebrant).await
    }

    /// Authenticate a celebrant and issue a fresh token pair.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let celebrant = self
            .celebrant_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials("Invalid credentials"))?;

        if !self
            .hasher
            .verify_password(password, &celebrant.password_hash)?
        {
            return Err(AppError::invalid_credentials("Invalid credentials"));
        }

        info!(celebrant_id = %celebrant.id, "Celebrant logged in");

        self.issue_and_store(celebrant).await
    }

    /// Rotate the refresh credential and issue a fresh token pair.
    ///
    /// The presented token must decode with a valid signature AND equal the
    /// server-stored value; rotation overwrites that value, so each refresh
    /// token authorizes at most one refresh.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthOutcome> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let celebrant = self
            .celebrant_repo
            .find_by_id(claims.celebrant_id())
            .await?
            .ok_or_else(|| AppError::token_expired("Invalid refresh token"))?;

        if celebrant.refresh_token.as_deref() != Some(refresh_token) {
            return Err(AppError::token_expired("Invalid refresh token"));
        }

        self.issue_and_store(celebrant).await
    }

    /// Generate a token pair and persist the refresh half, invalidating
    /// whatever refresh token was stored before.
    async fn issue_and_store(&self, celebrant: Celebrant) -> AppResult<AuthOutcome> {
        let tokens = self
            .encoder
            .generate_token_pair(celebrant.id, &celebrant.email)?;

        self.celebrant_repo
            .store_refresh_token(celebrant.id, Some(&tokens.refresh_token))
            .await?;

        Ok(AuthOutcome { celebrant, tokens })
    }
}
