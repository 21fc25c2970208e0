//! Core traits defined in `wishhub-core` and implemented by other crates.

pub mod notifier;

pub use notifier::{NotificationDispatcher, RemovalNotice};
