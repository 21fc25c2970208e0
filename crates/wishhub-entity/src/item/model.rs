//! Gift item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishhub_core::types::{ItemId, ListId};

use super::preference::PreferenceLevel;
use super::status::ItemStatus;

/// A single gift on a list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GiftItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Owning list.
    pub list_id: ListId,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional shop link.
    pub url: Option<String>,
    /// Preference level assigned by the celebrant.
    pub preference: PreferenceLevel,
    /// Authoritative claim flag; always agrees with claim-row existence.
    pub status: ItemStatus,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl GiftItem {
    /// Check whether the item is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Data required to create a new gift item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGiftItem {
    /// Owning list.
    pub list_id: ListId,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional shop link.
    pub url: Option<String>,
    /// Preference level.
    pub preference: PreferenceLevel,
}

/// Data for a partial update of an existing item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGiftItem {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New shop link, if changing.
    pub url: Option<String>,
    /// New preference level, if changing.
    pub preference: Option<PreferenceLevel>,
}
