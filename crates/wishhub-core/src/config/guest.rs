//! Guest session configuration.

use serde::{Deserialize, Serialize};

/// Guest session token configuration.
///
/// Deliberately a separate secret from [`super::auth::AuthConfig::jwt_secret`]:
/// a forged or leaked guest session must never verify as a celebrant
/// credential, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSessionConfig {
    /// Secret key for guest session signing (HMAC-SHA256).
    #[serde(default = "default_session_secret")]
    pub session_secret: String,
    /// Guest session TTL in days.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_days: u64,
}

fn default_session_secret() -> String {
    "CHANGE_ME_GUEST_IN_PRODUCTION".to_string()
}

fn default_session_ttl() -> u64 {
    30
}
