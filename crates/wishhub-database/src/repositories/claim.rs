//! Claim repository implementation.
//!
//! Every operation here that reads item or claim state before writing it
//! runs as one transaction holding a row-level exclusive lock on the item
//! (`SELECT ... FOR UPDATE`), so two concurrent calls on the same item
//! serialize and neither can act on an intermediate state. The unique
//! constraint on `claims.item_id` backstops the lock: if they ever
//! disagree, the constraint violation surfaces as `AlreadyClaimed`, not
//! as an internal failure. A transaction dropped mid-flight (client
//! disconnect) rolls back both the claim row and the status flip together.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::traits::RemovalNotice;
use wishhub_core::types::{GuestAccessId, ItemId};
use wishhub_entity::item::ItemStatus;

/// Repository owning the serialized claim/release/remove units of work.
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    /// Create a new claim repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically claim an item for a guest.
    ///
    /// Locks the item row, verifies it exists, is not soft-deleted, and is
    /// AVAILABLE, then inserts the claim and flips the status in the same
    /// transaction. Exactly one of N concurrent calls can succeed.
    pub async fn claim_item(
        &self,
        item_id: ItemId,
        guest_access_id: GuestAccessId,
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::internal_with("Failed to begin claim transaction", e))?;

        let row: Option<(ItemStatus, Option<DateTime<Utc>>)> =
            sqlx::query_as("SELECT status, deleted_at FROM gift_items WHERE id = $1 FOR UPDATE")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::internal_with("Failed to lock item row", e))?;

        let (status, deleted_at) = match row {
            Some(row) => row,
            None => return Err(AppError::item_not_found("Item not found")),
        };
        if deleted_at.is_some() {
            return Err(AppError::item_not_found("Item not found"));
        }
        if status == ItemStatus::Claimed {
            return Err(AppError::already_claimed("Item already claimed"));
        }

        sqlx::query("INSERT INTO claims (item_id, guest_access_id) VALUES ($1, $2)")
            .bind(item_id)
            .bind(guest_access_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("claims_item_id_key") =>
                {
                    AppError::already_claimed("Item already claimed")
                }
                _ => AppError::internal_with("Failed to insert claim", e),
            })?;

        sqlx::query("UPDATE gift_items SET status = 'claimed', updated_at = NOW() WHERE id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::internal_with("Failed to flip item status", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::internal_with("Failed to commit claim", e))?;

        Ok(())
    }

    /// Atomically release a guest's claim on an item.
    ///
    /// Locks the item row, then deletes the claim and flips the status back
    /// in the same transaction. Fails `NotClaimed` when no claim exists and
    /// `NotClaimedByCaller` when the claim is held by another guest.
    pub async fn release_item(
        &self,
        item_id: ItemId,
        guest_access_id: GuestAccessId,
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::internal_with("Failed to begin unclaim transaction", e))?;

        // Lock first so a concurrent claim/unclaim on the same item cannot
        // interleave between the claim lookup and the writes below.
        sqlx::query("SELECT id FROM gift_items WHERE id = $1 FOR UPDATE")
            .bind(item_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::internal_with("Failed to lock item row", e))?;

        let holder: Option<GuestAccessId> =
            sqlx::query_scalar("SELECT guest_access_id FROM claims WHERE item_id = $1")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::internal_with("Failed to find claim", e))?;

        match holder {
            None => return Err(AppError::not_claimed("Item is not claimed")),
            Some(holder) if holder != guest_access_id => {
                return Err(AppError::not_claimed_by_caller("Not claimed by you"));
            }
            Some(_) => {}
        }

        sqlx::query("DELETE FROM claims WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::internal_with("Failed to delete claim", e))?;

        sqlx::query("UPDATE gift_items SET status = 'available', updated_at = NOW() WHERE id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::internal_with("Failed to flip item status", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::internal_with("Failed to commit unclaim", e))?;

        Ok(())
    }

    /// Atomically soft-delete an item, returning the removal-notice
    /// material when the item was claimed.
    ///
    /// The claim row is kept; the notice carries the guest's email and
    /// language plus the item and list names, read under the same lock
    /// that serializes claim/unclaim.
    pub async fn soft_delete_item(&self, item_id: ItemId) -> AppResult<Option<RemovalNotice>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::internal_with("Failed to begin delete transaction", e))?;

        let row: Option<(ItemStatus, Option<DateTime<Utc>>)> =
            sqlx::query_as("SELECT status, deleted_at FROM gift_items WHERE id = $1 FOR UPDATE")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::internal_with("Failed to lock item row", e))?;

        let (status, deleted_at) = match row {
            Some(row) => row,
            None => return Err(AppError::item_not_found("Item not found")),
        };
        if deleted_at.is_some() {
            return Err(AppError::item_not_found("Item not found"));
        }

        let notice = if status == ItemStatus::Claimed {
            let row: Option<(String, String, String, String)> = sqlx::query_as(
                "SELECT g.email, i.name, l.name, g.language \
                 FROM claims c \
                 JOIN guest_accesses g ON g.id = c.guest_access_id \
                 JOIN gift_items i ON i.id = c.item_id \
                 JOIN gift_lists l ON l.id = i.list_id \
                 WHERE c.item_id = $1",
            )
            .bind(item_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::internal_with("Failed to read claim for notice", e))?;

            row.map(|(email, item_name, list_name, language)| RemovalNotice {
                email,
                item_name,
                list_name,
                language,
            })
        } else {
            None
        };

        sqlx::query("UPDATE gift_items SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::internal_with("Failed to soft-delete item", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::internal_with("Failed to commit delete", e))?;

        Ok(notice)
    }
}
