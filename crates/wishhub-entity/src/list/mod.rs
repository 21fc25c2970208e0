//! Gift list entity.

pub mod model;

pub use model::{CreateGiftList, GiftList, UpdateGiftList};
