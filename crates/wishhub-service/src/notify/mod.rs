//! Outbound notification dispatch.

pub mod dispatcher;
pub mod message;

pub use dispatcher::{MailRelayDispatcher, RecordingDispatcher};
