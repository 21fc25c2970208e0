//! Audience-specific item projections.
//!
//! Two projections of the same item must never cross audiences:
//!
//! - the celebrant projection carries no claim information at all — the
//!   status field is forced to AVAILABLE and the type has nowhere to put a
//!   claim identity;
//! - the guest projection includes an item only when it is available or
//!   claimed by the caller. An item claimed by someone else is absent from
//!   the response, not marked claimed: a guest must not learn that such an
//!   item exists.
//!
//! Both are pure functions over rows the repositories return, so the
//! masking rules are testable without a database.

use serde::{Deserialize, Serialize};

use wishhub_core::types::{GuestAccessId, ItemId};
use wishhub_database::repositories::item::ItemWithClaim;
use wishhub_entity::item::{GiftItem, ItemStatus, PreferenceLevel};

/// What a celebrant sees of their own item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrantItemView {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Shop link, if any.
    pub url: Option<String>,
    /// Always AVAILABLE, regardless of true state.
    pub status: ItemStatus,
    /// Preference level.
    pub preference: PreferenceLevel,
}

/// What a guest sees of an item they are allowed to see.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestItemView {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Shop link, if any.
    pub url: Option<String>,
    /// True status; CLAIMED only ever appears on the caller's own claims.
    pub status: ItemStatus,
    /// Preference level.
    pub preference: PreferenceLevel,
    /// Whether the caller holds the claim on this item.
    pub is_claimed_by_me: bool,
}

/// Project a single item for its owning celebrant.
pub fn project_item_for_celebrant(item: GiftItem) -> CelebrantItemView {
    CelebrantItemView {
        id: item.id,
        name: item.name,
        description: item.description,
        url: item.url,
        status: ItemStatus::Available,
        preference: item.preference,
    }
}

/// Project items for the owning celebrant's management view.
pub fn project_for_celebrant(items: Vec<GiftItem>) -> Vec<CelebrantItemView> {
    items.into_iter().map(project_item_for_celebrant).collect()
}

/// Project items for a guest's public view.
///
/// `caller` is the guest-access id the session resolved to; for a
/// celebrant previewing their own list it is a synthetic id that matches
/// no real claim, so everything claimed by others simply disappears.
pub fn project_for_guest(rows: Vec<ItemWithClaim>, caller: GuestAccessId) -> Vec<GuestItemView> {
    rows.into_iter()
        .filter_map(|row| {
            let is_claimed_by_me = row.claimed_by == Some(caller);
            if row.item.status != ItemStatus::Available && !is_claimed_by_me {
                return None;
            }
            Some(GuestItemView {
                id: row.item.id,
                name: row.item.name,
                description: row.item.description,
                url: row.item.url,
                status: row.item.status,
                preference: row.item.preference,
                is_claimed_by_me,
            })
        })
        .collect()
}
