//! Maps domain `AppError` to HTTP responses.
//!
//! This is the single terminal boundary: nothing below it writes a
//! response, and every domain failure that reaches a handler result is
//! serialized here into the uniform `{"error": {"code", "message"}}`
//! envelope.

//! The `IntoResponse for AppError` boundary and the `{"error":{"code",
//! "message"}}` envelope are defined alongside `AppError` in `wishhub-core`
//! (the orphan rule requires the impl to live in the crate that owns the
//! type). They are re-exported here so the API surface is unchanged.

pub use wishhub_core::error::{ApiErrorBody, ApiErrorResponse};
