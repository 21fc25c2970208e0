//! Gift item claim status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Denormalized claim flag for a gift item.
///
/// This column is authoritative and must always agree with the existence
/// of a claim row for the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_status", rename_all = "lowercase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// No claim exists; any guest may claim.
    Available,
    /// Exactly one claim exists.
    Claimed,
}

impl ItemStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Claimed => "CLAIMED",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = wishhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Ok(Self::Available),
            "CLAIMED" => Ok(Self::Claimed),
            _ => Err(wishhub_core::AppError::validation(format!(
                "Invalid item status: '{s}'. Expected one of: AVAILABLE, CLAIMED"
            ))),
        }
    }
}
