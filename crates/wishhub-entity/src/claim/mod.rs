//! Claim entity.

pub mod model;

pub use model::Claim;
