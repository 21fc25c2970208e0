//! # wishhub-entity
//!
//! Domain entity models for Wishhub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod celebrant;
pub mod claim;
pub mod guest;
pub mod item;
pub mod list;
