//! Unified application error type for Wishhub.
//!
//! All crates map their internal failures into [`AppError`] for consistent
//! propagation through the ? operator. The enum is closed: one variant per
//! error code the API can emit, matched exhaustively at the HTTP boundary
//! and nowhere else.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unified application error used throughout Wishhub.
///
/// Every variant carries the client-visible message. `Internal` additionally
/// carries the underlying cause, which is logged at the response boundary
/// and never serialized to the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid celebrant credential.
    #[error("{0}")]
    Unauthorized(String),
    /// Missing or invalid guest session. Callers render the access-grant
    /// form on this code rather than a hard failure page.
    #[error("{0}")]
    UnauthorizedGuest(String),
    /// Login failed; deliberately identical for unknown email and wrong
    /// password.
    #[error("{0}")]
    InvalidCredentials(String),
    /// Refresh credential missing, expired, or superseded by rotation.
    #[error("{0}")]
    TokenExpired(String),
    /// Registration attempted with an email that already has an account.
    #[error("{0}")]
    EmailAlreadyExists(String),
    /// List absent, soft-deleted, or owned by another celebrant.
    #[error("{0}")]
    ListNotFound(String),
    /// Item absent, soft-deleted, or owned by another celebrant.
    #[error("{0}")]
    ItemNotFound(String),
    /// Claim attempted on an item that already has a claim, including one
    /// lost concurrently to another guest.
    #[error("{0}")]
    AlreadyClaimed(String),
    /// Unclaim attempted on an item with no claim.
    #[error("{0}")]
    NotClaimed(String),
    /// Unclaim attempted on an item claimed by a different guest.
    #[error("{0}")]
    NotClaimedByCaller(String),
    /// Input validation failed; message is the first violation found.
    #[error("{0}")]
    Validation(String),
    /// Unexpected failure. Message and source are logged, never returned.
    #[error("{message}")]
    Internal {
        /// Internal detail for the log line.
        message: String,
        /// Optional underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create an unauthorized-guest error.
    pub fn unauthorized_guest(message: impl Into<String>) -> Self {
        Self::UnauthorizedGuest(message.into())
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials(message.into())
    }

    /// Create a token-expired error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::TokenExpired(message.into())
    }

    /// Create an email-already-exists error.
    pub fn email_already_exists(message: impl Into<String>) -> Self {
        Self::EmailAlreadyExists(message.into())
    }

    /// Create a list-not-found error.
    pub fn list_not_found(message: impl Into<String>) -> Self {
        Self::ListNotFound(message.into())
    }

    /// Create an item-not-found error.
    pub fn item_not_found(message: impl Into<String>) -> Self {
        Self::ItemNotFound(message.into())
    }

    /// Create an already-claimed error.
    pub fn already_claimed(message: impl Into<String>) -> Self {
        Self::AlreadyClaimed(message.into())
    }

    /// Create a not-claimed error.
    pub fn not_claimed(message: impl Into<String>) -> Self {
        Self::NotClaimed(message.into())
    }

    /// Create a not-claimed-by-caller error.
    pub fn not_claimed_by_caller(message: impl Into<String>) -> Self {
        Self::NotClaimedByCaller(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with an underlying cause.
    pub fn internal_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Machine-readable error code serialized in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::UnauthorizedGuest(_) => "UNAUTHORIZED_GUEST",
            Self::InvalidCredentials(_) => "AUTH_INVALID_CREDENTIALS",
            Self::TokenExpired(_) => "AUTH_TOKEN_EXPIRED",
            Self::EmailAlreadyExists(_) => "AUTH_EMAIL_ALREADY_EXISTS",
            Self::ListNotFound(_) => "LIST_NOT_FOUND",
            Self::ItemNotFound(_) => "ITEM_NOT_FOUND",
            Self::AlreadyClaimed(_) => "ITEM_ALREADY_CLAIMED",
            Self::NotClaimed(_) => "ITEM_NOT_CLAIMED",
            Self::NotClaimedByCaller(_) => "ITEM_NOT_CLAIMED_BY_YOU",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized(_)
            | Self::UnauthorizedGuest(_)
            | Self::InvalidCredentials(_)
            | Self::TokenExpired(_) => 401,
            Self::EmailAlreadyExists(_) | Self::AlreadyClaimed(_) => 409,
            Self::ListNotFound(_) | Self::ItemNotFound(_) => 404,
            Self::NotClaimedByCaller(_) => 403,
            Self::NotClaimed(_) | Self::Validation(_) => 400,
            Self::Internal { .. } => 500,
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            Self::Unauthorized(m) => Self::Unauthorized(m.clone()),
            Self::UnauthorizedGuest(m) => Self::UnauthorizedGuest(m.clone()),
            Self::InvalidCredentials(m) => Self::InvalidCredentials(m.clone()),
            Self::TokenExpired(m) => Self::TokenExpired(m.clone()),
            Self::EmailAlreadyExists(m) => Self::EmailAlreadyExists(m.clone()),
            Self::ListNotFound(m) => Self::ListNotFound(m.clone()),
            Self::ItemNotFound(m) => Self::ItemNotFound(m.clone()),
            Self::AlreadyClaimed(m) => Self::AlreadyClaimed(m.clone()),
            Self::NotClaimed(m) => Self::NotClaimed(m.clone()),
            Self::NotClaimedByCaller(m) => Self::NotClaimedByCaller(m.clone()),
            Self::Validation(m) => Self::Validation(m.clone()),
            Self::Internal { message, .. } => Self::Internal {
                message: message.clone(),
                source: None,
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal_with(format!("JSON serialization error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::internal_with(format!("Configuration error: {err}"), err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// The error envelope.
    pub error: ApiErrorBody,
}

/// Inner error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Exhaustive on purpose: adding an error variant must force a
        // decision about its client-visible message here.
        let message = match &self {
            AppError::Unauthorized(m)
            | AppError::UnauthorizedGuest(m)
            | AppError::InvalidCredentials(m)
            | AppError::TokenExpired(m)
            | AppError::EmailAlreadyExists(m)
            | AppError::ListNotFound(m)
            | AppError::ItemNotFound(m)
            | AppError::AlreadyClaimed(m)
            | AppError::NotClaimed(m)
            | AppError::NotClaimedByCaller(m)
            | AppError::Validation(m) => m.clone(),
            AppError::Internal { message, source } => {
                tracing::error!(detail = %message, source = ?source, "Internal server error");
                "An unexpected error occurred.".to_string()
            }
        };

        let status = StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: self.code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
