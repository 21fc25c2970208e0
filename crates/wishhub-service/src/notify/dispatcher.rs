//! Notification dispatcher implementations.
//!
//! The relay dispatcher posts notices as JSON to an external mail relay.
//! Every failure is absorbed here with a warning log; the claim path that
//! triggered the notice has already succeeded and must stay succeeded.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use wishhub_core::config::mail::MailConfig;
use wishhub_core::traits::{NotificationDispatcher, RemovalNotice};

use super::message;

/// JSON payload the relay endpoint accepts.
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

/// Dispatches removal notices to a mail relay over HTTP.
#[derive(Debug)]
pub struct MailRelayDispatcher {
    client: reqwest::Client,
    config: MailConfig,
}

impl MailRelayDispatcher {
    /// Creates a new dispatcher from mail configuration.
    pub fn new(config: MailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_default();

        Self { client, config }
    }
}

#[async_trait]
impl NotificationDispatcher for MailRelayDispatcher {
    async fn dispatch(&self, notice: RemovalNotice) {
        if !self.config.enabled {
            info!(
                to = %notice.email,
                item = %notice.item_name,
                "Mail disabled; removal notice logged only"
            );
            return;
        }

        let payload = RelayPayload {
            from: &self.config.from,
            to: &notice.email,
            subject: message::subject(&notice),
            text: message::body(&notice),
        };

        let result = self
            .client
            .post(&self.config.relay_url)
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!(to = %notice.email, item = %notice.item_name, "Removal notice sent");
            }
            Ok(response) => {
                warn!(
                    to = %notice.email,
                    status = %response.status(),
                    "Mail relay rejected removal notice"
                );
            }
            Err(e) => {
                warn!(to = %notice.email, error = %e, "Failed to send removal notice");
            }
        }
    }
}

/// Records dispatched notices instead of sending them. Test double.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<RemovalNotice>>,
}

impl RecordingDispatcher {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices dispatched so far, in order.
    pub fn sent(&self) -> Vec<RemovalNotice> {
        self.sent.lock().expect("recorder poisoned").clone()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn dispatch(&self, notice: RemovalNotice) {
        self.sent.lock().expect("recorder poisoned").push(notice);
    }
}
