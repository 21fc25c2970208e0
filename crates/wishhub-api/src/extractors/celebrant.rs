//! `AuthCelebrant` extractor — pulls the JWT from the Authorization
//! header, validates it, and injects the celebrant context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use wishhub_core::error::AppError;
use wishhub_service::context::CelebrantContext;

use crate::state::AppState;

/// Extracted authenticated celebrant context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthCelebrant(pub CelebrantContext);

impl AuthCelebrant {
    /// Returns the inner `CelebrantContext`.
    pub fn context(&self) -> &CelebrantContext {
        &self.0
    }
}

impl std::ops::Deref for AuthCelebrant {
    type Target = CelebrantContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthCelebrant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Authorization header missing"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        Ok(AuthCelebrant(CelebrantContext::new(
            claims.celebrant_id(),
            claims.email,
        )))
    }
}
