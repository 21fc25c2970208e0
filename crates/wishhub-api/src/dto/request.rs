//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use wishhub_entity::item::PreferenceLevel;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password; policy checks happen in the account service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create list request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    /// Display name; the slug is derived from it.
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be at least 3 characters and at most 50"
    ))]
    pub name: String,
    /// Optional cover image reference.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial list update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListRequest {
    /// New display name, if changing. Renames do not preserve the slug.
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be at least 3 characters and at most 50"
    ))]
    pub name: Option<String>,
    /// New cover image reference, if changing.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Create item request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Display name.
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be at least 3 characters and at most 50"
    ))]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    #[validate(length(max = 200, message = "Description cannot exceed 200 characters"))]
    pub description: Option<String>,
    /// Optional shop link.
    #[serde(default)]
    #[validate(url(message = "Must be a valid URL"))]
    pub url: Option<String>,
    /// Preference level, MEDIUM when omitted.
    #[serde(default)]
    pub preference: PreferenceLevel,
}

/// Partial item update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateItemRequest {
    /// New display name, if changing.
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be at least 3 characters and at most 50"
    ))]
    pub name: Option<String>,
    /// New description, if changing.
    #[serde(default)]
    #[validate(length(max = 200, message = "Description cannot exceed 200 characters"))]
    pub description: Option<String>,
    /// New shop link, if changing.
    #[serde(default)]
    #[validate(url(message = "Must be a valid URL"))]
    pub url: Option<String>,
    /// New preference level, if changing.
    #[serde(default)]
    pub preference: Option<PreferenceLevel>,
}

/// Guest access-grant request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuestAccessRequest {
    /// The guest's email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Preferred language, `"en"` when omitted.
    #[serde(default = "default_language")]
    #[validate(length(min = 2, max = 5, message = "Language must be 2 to 5 characters"))]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}
