//! # wishhub-auth
//!
//! Credential issuance and verification for Wishhub's two independent
//! identity channels, plus password hashing.
//!
//! ## Modules
//!
//! - `jwt` — celebrant access and refresh token creation and validation
//! - `guest` — opaque guest session tokens, signed with their own secret
//! - `password` — Argon2id password hashing and policy enforcement
//!
//! The two channels share no trust boundary: each is signed with its own
//! configured secret, and a token from one channel never verifies in the
//! other.

pub mod guest;
pub mod jwt;
pub mod password;

pub use guest::{GuestSessionClaims, GuestTokenIssuer};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
