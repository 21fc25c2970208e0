//! Gift list management.

pub mod service;
pub mod slug;

pub use service::{ListService, ListWithItems};
