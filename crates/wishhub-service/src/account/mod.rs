//! Celebrant account lifecycle.

pub mod service;

pub use service::{AccountService, AuthOutcome};
