//! # wishhub-core
//!
//! Core crate for Wishhub. Contains configuration schemas, typed
//! identifiers, the notification dispatcher trait, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Wishhub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
