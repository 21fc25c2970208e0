//! Claim entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishhub_core::types::{ClaimId, GuestAccessId, ItemId};

/// A guest's exclusive reservation of one gift item.
///
/// `item_id` carries a unique constraint: at most one claim may exist per
/// item, and the existence of a row here is equivalent to the item's
/// status being CLAIMED.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Claim {
    /// Unique claim identifier.
    pub id: ClaimId,
    /// The claimed item (unique).
    pub item_id: ItemId,
    /// The guest holding the claim.
    pub guest_access_id: GuestAccessId,
    /// When the claim was made.
    pub created_at: DateTime<Utc>,
}
