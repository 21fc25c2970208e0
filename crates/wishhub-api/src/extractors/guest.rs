//! `GuestSession` extractor — pulls the guest session cookie, verifies
//! it, and injects the guest context.
//!
//! A missing or invalid session is `UnauthorizedGuest`, which the calling
//! surface interprets as "show the access-grant form". Whether the
//! session's grant actually belongs to the list being requested is checked
//! by the service layer, which is the first place both facts are known.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use wishhub_core::error::AppError;
use wishhub_service::context::GuestContext;

use crate::state::AppState;

use super::GUEST_COOKIE;

/// Extracted guest session context available in handlers.
#[derive(Debug, Clone)]
pub struct GuestSession(pub GuestContext);

impl GuestSession {
    /// Returns the inner `GuestContext`.
    pub fn context(&self) -> &GuestContext {
        &self.0
    }
}

impl std::ops::Deref for GuestSession {
    type Target = GuestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for GuestSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(GUEST_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthorized_guest("Guest session missing"))?;

        let claims = state.guest_tokens.verify(&token)?;

        Ok(GuestSession(GuestContext::new(
            claims.gid,
            claims.lid,
            claims.email,
        )))
    }
}
