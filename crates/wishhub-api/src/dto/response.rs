//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wishhub_core::types::{CelebrantId, ListId};
use wishhub_entity::item::ItemStatus;
use wishhub_service::claim::CelebrantItemView;
use wishhub_service::list::ListWithItems;

/// Celebrant summary for auth responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrantResponse {
    /// Celebrant ID.
    pub id: CelebrantId,
    /// Login email.
    pub email: String,
}

/// Register/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Short-lived access token; the refresh token rides the cookie.
    pub token: String,
    /// The authenticated account.
    pub user: CelebrantResponse,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Fresh access token.
    pub token: String,
}

/// A gift list as the owner sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// List ID.
    pub id: ListId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Cover image, if any.
    pub image_url: Option<String>,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
    /// Items through the celebrant projection. Omitted from responses
    /// that carry the list alone (create, update).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CelebrantItemView>,
}

impl From<wishhub_entity::list::GiftList> for ListResponse {
    fn from(list: wishhub_entity::list::GiftList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            slug: list.slug,
            image_url: list.image_url,
            created_at: list.created_at,
            items: Vec::new(),
        }
    }
}

impl From<ListWithItems> for ListResponse {
    fn from(value: ListWithItems) -> Self {
        Self {
            id: value.list.id,
            name: value.list.name,
            slug: value.list.slug,
            image_url: value.list.image_url,
            created_at: value.list.created_at,
            items: value.items,
        }
    }
}

/// Claim/unclaim response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// Always true on the success path.
    pub success: bool,
    /// The item's status after the operation.
    pub status: ItemStatus,
}

/// Generic success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always true.
    pub success: bool,
}

impl SuccessResponse {
    /// The canonical success body.
    pub fn ok() -> Self {
        Self { success: true }
    }
}
