//! Guest access entity.

pub mod model;

pub use model::GuestAccess;
