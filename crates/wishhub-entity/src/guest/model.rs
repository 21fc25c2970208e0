//! Guest access entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishhub_core::types::{GuestAccessId, ListId};

/// A viewing-rights grant for one email on one list.
///
/// Unique per (list, email); upserted on every access-grant request so the
/// stored language preference tracks the guest's latest choice. Grants are
/// never deleted, and exist independently of any claim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestAccess {
    /// Unique grant identifier.
    pub id: GuestAccessId,
    /// The list this grant is scoped to.
    pub list_id: ListId,
    /// The guest's email address.
    pub email: String,
    /// Preferred notification language (e.g. `"en"`, `"it"`).
    pub language: String,
    /// When the grant was first created.
    pub created_at: DateTime<Utc>,
    /// When the grant was last refreshed.
    pub updated_at: DateTime<Utc>,
}
