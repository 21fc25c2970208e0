//! The claim engine and the view projections that keep claim state from
//! leaking to the wrong audience.

pub mod engine;
pub mod view;

pub use engine::ClaimEngine;
pub use view::{CelebrantItemView, GuestItemView};
