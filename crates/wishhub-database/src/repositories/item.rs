//! Gift item repository implementation.
//!
//! Ownership is transitive: celebrant-facing queries join through
//! `gift_lists` and filter on the owner id.

use sqlx::{FromRow, PgPool};

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::{CelebrantId, GuestAccessId, ItemId, ListId};
use wishhub_entity::item::{CreateGiftItem, GiftItem, UpdateGiftItem};

/// A non-deleted item together with the holder of its claim, if any.
#[derive(Debug, Clone, FromRow)]
pub struct ItemWithClaim {
    /// The item row.
    #[sqlx(flatten)]
    pub item: GiftItem,
    /// Guest access id of the claim holder, when claimed.
    pub claimed_by: Option<GuestAccessId>,
}

/// Repository for gift item records.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a non-deleted item by id, owner-filtered through its list.
    pub async fn find_owned(
        &self,
        id: ItemId,
        celebrant_id: CelebrantId,
    ) -> AppResult<Option<GiftItem>> {
        sqlx::query_as::<_, GiftItem>(
            "SELECT i.* FROM gift_items i \
             JOIN gift_lists l ON l.id = i.list_id \
             WHERE i.id = $1 AND l.celebrant_id = $2 AND i.deleted_at IS NULL",
        )
        .bind(id)
        .bind(celebrant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to find owned item", e))
    }

    /// Return the owning list id of a non-deleted item, if the item exists.
    pub async fn find_list_id(&self, id: ItemId) -> AppResult<Option<ListId>> {
        sqlx::query_scalar::<_, ListId>(
            "SELECT list_id FROM gift_items WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to resolve item list", e))
    }

    /// List all non-deleted items on a list, oldest first.
    pub async fn find_active_by_list(&self, list_id: ListId) -> AppResult<Vec<GiftItem>> {
        sqlx::query_as::<_, GiftItem>(
            "SELECT * FROM gift_items \
             WHERE list_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to list items", e))
    }

    /// List all non-deleted items on a list together with their claim
    /// holders. Input to the guest-view projection.
    pub async fn find_active_by_list_with_claims(
        &self,
        list_id: ListId,
    ) -> AppResult<Vec<ItemWithClaim>> {
        sqlx::query_as::<_, ItemWithClaim>(
            "SELECT i.*, c.guest_access_id AS claimed_by FROM gift_items i \
             LEFT JOIN claims c ON c.item_id = i.id \
             WHERE i.list_id = $1 AND i.deleted_at IS NULL \
             ORDER BY i.created_at ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to list items with claims", e))
    }

    /// Create a new item.
    pub async fn create(&self, data: &CreateGiftItem) -> AppResult<GiftItem> {
        sqlx::query_as::<_, GiftItem>(
            "INSERT INTO gift_items (list_id, name, description, url, preference) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.list_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.url)
        .bind(data.preference)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to create item", e))
    }

    /// Partially update an item's descriptive fields.
    pub async fn update(&self, id: ItemId, data: &UpdateGiftItem) -> AppResult<GiftItem> {
        sqlx::query_as::<_, GiftItem>(
            "UPDATE gift_items SET name = COALESCE($2, name), \
                                   description = COALESCE($3, description), \
                                   url = COALESCE($4, url), \
                                   preference = COALESCE($5, preference), \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.url)
        .bind(data.preference)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to update item", e))?
        .ok_or_else(|| AppError::item_not_found("Item not found"))
    }
}
