//! Notification dispatcher trait for the removal side-channel.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Material for the notice sent to a guest whose claimed item was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalNotice {
    /// The guest's email address.
    pub email: String,
    /// Name of the removed item.
    pub item_name: String,
    /// Name of the list the item belonged to.
    pub list_name: String,
    /// The guest's stored language preference (e.g. `"en"`, `"it"`).
    pub language: String,
}

/// Trait for the outbound notification channel.
///
/// Dispatch is fire-and-forget: the claim path spawns the send and never
/// awaits it, and implementations must absorb their own failures (log,
/// don't propagate). Nothing in the claim engine depends on a dispatch
/// outcome.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a removal notice to the guest.
    async fn dispatch(&self, notice: RemovalNotice);
}
