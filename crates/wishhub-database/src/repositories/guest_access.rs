//! Guest access repository implementation.

use sqlx::PgPool;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::{GuestAccessId, ListId};
use wishhub_entity::guest::GuestAccess;

/// Repository for guest-access grants.
#[derive(Debug, Clone)]
pub struct GuestAccessRepository {
    pool: PgPool,
}

impl GuestAccessRepository {
    /// Create a new guest access repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a grant by primary key.
    pub async fn find_by_id(&self, id: GuestAccessId) -> AppResult<Option<GuestAccess>> {
        sqlx::query_as::<_, GuestAccess>("SELECT * FROM guest_accesses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::internal_with("Failed to find guest access", e))
    }

    /// Create or refresh the grant for (list, email).
    ///
    /// A repeat visit updates the stored language preference and returns
    /// the existing row; grants are never duplicated or deleted.
    pub async fn upsert(
        &self,
        list_id: ListId,
        email: &str,
        language: &str,
    ) -> AppResult<GuestAccess> {
        sqlx::query_as::<_, GuestAccess>(
            "INSERT INTO guest_accesses (list_id, email, language) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (list_id, email) \
             DO UPDATE SET language = EXCLUDED.language, updated_at = NOW() \
             RETURNING *",
        )
        .bind(list_id)
        .bind(email)
        .bind(language)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to upsert guest access", e))
    }
}
