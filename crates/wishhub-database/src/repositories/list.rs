//! Gift list repository implementation.
//!
//! Every celebrant-facing query filters by owner id; a list owned by
//! someone else is indistinguishable from a missing one at this layer.

use sqlx::PgPool;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::{CelebrantId, ListId};
use wishhub_entity::list::{CreateGiftList, GiftList, UpdateGiftList};

/// Repository for gift list records.
#[derive(Debug, Clone)]
pub struct ListRepository {
    pool: PgPool,
}

impl ListRepository {
    /// Create a new list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a non-deleted list by slug, regardless of owner (public lookup).
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<GiftList>> {
        sqlx::query_as::<_, GiftList>(
            "SELECT * FROM gift_lists WHERE slug = $1 AND deleted_at IS NULL",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to find list by slug", e))
    }

    /// Find a non-deleted list by slug, owner-filtered.
    pub async fn find_owned_by_slug(
        &self,
        slug: &str,
        celebrant_id: CelebrantId,
    ) -> AppResult<Option<GiftList>> {
        sqlx::query_as::<_, GiftList>(
            "SELECT * FROM gift_lists \
             WHERE slug = $1 AND celebrant_id = $2 AND deleted_at IS NULL",
        )
        .bind(slug)
        .bind(celebrant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to find owned list by slug", e))
    }

    /// Find a non-deleted list by id, owner-filtered.
    pub async fn find_owned_by_id(
        &self,
        id: ListId,
        celebrant_id: CelebrantId,
    ) -> AppResult<Option<GiftList>> {
        sqlx::query_as::<_, GiftList>(
            "SELECT * FROM gift_lists \
             WHERE id = $1 AND celebrant_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(celebrant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to find owned list by id", e))
    }

    /// List all non-deleted lists owned by a celebrant, newest first.
    pub async fn find_all_owned(&self, celebrant_id: CelebrantId) -> AppResult<Vec<GiftList>> {
        sqlx::query_as::<_, GiftList>(
            "SELECT * FROM gift_lists \
             WHERE celebrant_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at DESC",
        )
        .bind(celebrant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to list owned lists", e))
    }

    /// Check whether a slug is already taken (including by deleted lists;
    /// the unique constraint spans them).
    pub async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gift_lists WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::internal_with("Failed to check slug", e))?;
        Ok(count > 0)
    }

    /// Create a new list.
    ///
    /// Returns `Ok(None)` when the slug lost a race to another insert, so
    /// the caller can retry with a suffixed slug.
    pub async fn create(&self, data: &CreateGiftList) -> AppResult<Option<GiftList>> {
        let result = sqlx::query_as::<_, GiftList>(
            "INSERT INTO gift_lists (celebrant_id, name, slug, image_url) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.celebrant_id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(list) => Ok(Some(list)),
            Err(sqlx::Error::Database(ref db_err))
                if db_err.constraint() == Some("gift_lists_slug_key") =>
            {
                Ok(None)
            }
            Err(e) => Err(AppError::internal_with("Failed to create list", e)),
        }
    }

    /// Partially update a list's name and image reference.
    pub async fn update(&self, id: ListId, data: &UpdateGiftList) -> AppResult<GiftList> {
        sqlx::query_as::<_, GiftList>(
            "UPDATE gift_lists SET name = COALESCE($2, name), \
                                   image_url = COALESCE($3, image_url), \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to update list", e))?
        .ok_or_else(|| AppError::list_not_found("List not found"))
    }

    /// Soft-delete a list.
    pub async fn soft_delete(&self, id: ListId) -> AppResult<()> {
        sqlx::query("UPDATE gift_lists SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::internal_with("Failed to soft-delete list", e))?;
        Ok(())
    }
}
