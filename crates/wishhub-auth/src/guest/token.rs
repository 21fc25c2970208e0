//! Opaque guest session tokens.
//!
//! Signed with the guest channel's own secret. A guest session binds a
//! guest-access grant, the list that grant is scoped to, and the guest's
//! email; it carries no celebrant capability and a celebrant token carries
//! no guest capability.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use wishhub_core::config::guest::GuestSessionConfig;
use wishhub_core::error::AppError;
use wishhub_core::types::{GuestAccessId, ListId};

/// Claims payload embedded in a guest session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSessionClaims {
    /// The guest-access grant this session represents.
    pub gid: GuestAccessId,
    /// The list the grant is scoped to.
    pub lid: ListId,
    /// The guest's email address.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies guest session tokens.
#[derive(Clone)]
pub struct GuestTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    session_ttl_days: i64,
}

impl std::fmt::Debug for GuestTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestTokenIssuer")
            .field("session_ttl_days", &self.session_ttl_days)
            .finish()
    }
}

impl GuestTokenIssuer {
    /// Creates a new issuer from guest session configuration.
    pub fn new(config: &GuestSessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
            session_ttl_days: config.session_ttl_days as i64,
        }
    }

    /// Issue a session token for a guest-access grant.
    pub fn issue(
        &self,
        guest_access_id: GuestAccessId,
        list_id: ListId,
        email: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.session_ttl_days);

        let claims = GuestSessionClaims {
            gid: guest_access_id,
            lid: list_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode guest session: {e}")))
    }

    /// Verify a session token. Any failure — bad signature, expiry,
    /// malformed payload — reads as an absent session.
    pub fn verify(&self, token: &str) -> Result<GuestSessionClaims, AppError> {
        decode::<GuestSessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::unauthorized_guest("Guest session invalid"))
    }
}
