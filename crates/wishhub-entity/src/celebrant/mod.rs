//! Celebrant account entity.

pub mod model;

pub use model::{Celebrant, CreateCelebrant};
