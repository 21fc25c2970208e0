//! Gift item preference level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much the celebrant wants a given item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "preference_level", rename_all = "lowercase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceLevel {
    /// Nice to have.
    Low,
    /// Would like.
    Medium,
    /// Really wants.
    High,
}

impl PreferenceLevel {
    /// Return the preference as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl Default for PreferenceLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for PreferenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreferenceLevel {
    type Err = wishhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(wishhub_core::AppError::validation(format!(
                "Invalid preference level: '{s}'. Expected one of: LOW, MEDIUM, HIGH"
            ))),
        }
    }
}
