//! Claim and unclaim arbitration.
//!
//! The engine verifies the caller's list scope, then delegates the actual
//! state transition to the claim repository, whose transactions serialize
//! per item. State machine per item:
//!
//! ```text
//! AVAILABLE --claim(g)--> CLAIMED(g) --unclaim(g)--> AVAILABLE
//! CLAIMED(g) --removed by celebrant--> soft-deleted (g is notified)
//! ```
//!
//! There is no transition from CLAIMED(g) to CLAIMED(g') without passing
//! through AVAILABLE.

use std::sync::Arc;

use tracing::info;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::ItemId;
use wishhub_database::repositories::{ClaimRepository, ItemRepository};
use wishhub_entity::item::ItemStatus;

use crate::context::GuestContext;

/// Arbitrates exclusive claims on gift items.
#[derive(Debug, Clone)]
pub struct ClaimEngine {
    item_repo: Arc<ItemRepository>,
    claim_repo: Arc<ClaimRepository>,
}

impl ClaimEngine {
    /// Creates a new claim engine.
    pub fn new(item_repo: Arc<ItemRepository>, claim_repo: Arc<ClaimRepository>) -> Self {
        Self {
            item_repo,
            claim_repo,
        }
    }

    /// Claim an item for the calling guest.
    ///
    /// Exactly one of any number of concurrent calls on the same item
    /// succeeds; the rest fail `AlreadyClaimed`, including a repeat call
    /// from the guest who just won.
    pub async fn claim(&self, ctx: &GuestContext, item_id: ItemId) -> AppResult<ItemStatus> {
        self.verify_scope(ctx, item_id).await?;

        self.claim_repo
            .claim_item(item_id, ctx.guest_access_id)
            .await?;

        info!(%item_id, guest_access_id = %ctx.guest_access_id, "Item claimed");
        Ok(ItemStatus::Claimed)
    }

    /// Release the calling guest's claim on an item.
    pub async fn unclaim(&self, ctx: &GuestContext, item_id: ItemId) -> AppResult<ItemStatus> {
        self.verify_scope(ctx, item_id).await?;

        self.claim_repo
            .release_item(item_id, ctx.guest_access_id)
            .await?;

        info!(%item_id, guest_access_id = %ctx.guest_access_id, "Item unclaimed");
        Ok(ItemStatus::Available)
    }

    /// A guest session only ever acts on items of the list its underlying
    /// grant belongs to; presenting it against another list's item fails
    /// the same way an absent session would.
    async fn verify_scope(&self, ctx: &GuestContext, item_id: ItemId) -> AppResult<()> {
        let list_id = self
            .item_repo
            .find_list_id(item_id)
            .await?
            .ok_or_else(|| AppError::item_not_found("Item not found"))?;

        if list_id != ctx.list_id {
            return Err(AppError::unauthorized_guest("Guest session missing"));
        }
        Ok(())
    }
}
