//! Access-gateway extractors.
//!
//! Each request resolves to at most one identity before its handler runs:
//! [`AuthCelebrant`] for the bearer-token channel, [`GuestSession`] for the
//! cookie channel. The extractors produce immutable typed contexts; no
//! handler re-derives identity.

pub mod celebrant;
pub mod guest;

pub use celebrant::AuthCelebrant;
pub use guest::GuestSession;

/// Cookie carrying the celebrant refresh credential.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Cookie carrying the guest session token.
pub const GUEST_COOKIE: &str = "guest_session";
