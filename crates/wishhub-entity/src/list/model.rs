//! Gift list entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishhub_core::types::{CelebrantId, ListId};

/// A gift list owned by exactly one celebrant.
///
/// Lists are soft-deleted: `deleted_at` is set and the row is kept, so
/// claims and guest-access grants stay resolvable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GiftList {
    /// Unique list identifier.
    pub id: ListId,
    /// Owning celebrant.
    pub celebrant_id: CelebrantId,
    /// Display name.
    pub name: String,
    /// URL-safe unique identifier derived from the name. Not stable
    /// across renames.
    pub slug: String,
    /// Optional cover image reference.
    pub image_url: Option<String>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
    /// When the list was last updated.
    pub updated_at: DateTime<Utc>,
}

impl GiftList {
    /// Check whether the list is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Data required to create a new gift list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGiftList {
    /// Owning celebrant.
    pub celebrant_id: CelebrantId,
    /// Display name.
    pub name: String,
    /// Derived unique slug.
    pub slug: String,
    /// Optional cover image reference.
    pub image_url: Option<String>,
}

/// Data for a partial update of an existing list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGiftList {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New cover image reference, if changing.
    pub image_url: Option<String>,
}
