//! Guest access and the public list view.

pub mod service;

pub use service::{GuestService, PublicListView};
