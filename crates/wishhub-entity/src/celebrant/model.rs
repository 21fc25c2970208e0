//! Celebrant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use wishhub_core::types::CelebrantId;

/// An account owner who creates and manages gift lists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Celebrant {
    /// Unique celebrant identifier.
    pub id: CelebrantId,
    /// Login email, unique across accounts.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Server-tracked refresh credential; overwritten on every login and
    /// refresh, so exactly one refresh token is valid at a time.
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new celebrant account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCelebrant {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
