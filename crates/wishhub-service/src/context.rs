//! Request contexts carrying the resolved caller identity.
//!
//! The access gateway produces exactly one of these per request and passes
//! it to handlers by value; nothing mutates a context after creation. The
//! two identities are separate types on purpose — a handler that needs a
//! guest cannot accidentally accept a celebrant, and vice versa.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wishhub_core::types::{CelebrantId, GuestAccessId, ListId};

/// Context for a request authenticated on the celebrant channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrantContext {
    /// The authenticated celebrant's ID.
    pub celebrant_id: CelebrantId,
    /// The celebrant's email (from the access token claims).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl CelebrantContext {
    /// Creates a new celebrant context.
    pub fn new(celebrant_id: CelebrantId, email: String) -> Self {
        Self {
            celebrant_id,
            email,
            request_time: Utc::now(),
        }
    }
}

/// Context for a request authenticated on the guest channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestContext {
    /// The guest-access grant this session represents.
    pub guest_access_id: GuestAccessId,
    /// The list the grant is scoped to.
    pub list_id: ListId,
    /// The guest's email address.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl GuestContext {
    /// Creates a new guest context.
    pub fn new(guest_access_id: GuestAccessId, list_id: ListId, email: String) -> Self {
        Self {
            guest_access_id,
            list_id,
            email,
            request_time: Utc::now(),
        }
    }
}
