//! Mail relay configuration for removal notices.

use serde::{Deserialize, Serialize};

/// Mail relay configuration.
///
/// Notices are posted as JSON to an external relay endpoint. When
/// `enabled` is false the dispatcher only logs, which is the default for
/// local development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Whether outbound mail is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Relay endpoint URL.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Sender address.
    #[serde(default = "default_from")]
    pub from: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            relay_url: default_relay_url(),
            from: default_from(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_relay_url() -> String {
    "http://localhost:8025/api/send".to_string()
}

fn default_from() -> String {
    "Wishhub <noreply@wishhub.local>".to_string()
}

fn default_timeout() -> u64 {
    10
}
