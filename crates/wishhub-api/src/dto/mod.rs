//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;

/// Validate a request DTO, surfacing the first violation message.
pub fn validate(req: &impl Validate) -> AppResult<()> {
    req.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Validation failed".to_string());
        AppError::validation(message)
    })
}
