//! Guest session token issuance and verification.

pub mod token;

pub use token::{GuestSessionClaims, GuestTokenIssuer};
