//! Gift item entity.

pub mod model;
pub mod preference;
pub mod status;

pub use model::{CreateGiftItem, GiftItem, UpdateGiftItem};
pub use preference::PreferenceLevel;
pub use status::ItemStatus;
