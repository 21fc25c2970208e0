//! # wishhub-api
//!
//! HTTP API layer for Wishhub built on Axum.
//!
//! Provides all REST endpoints, the access-gateway extractors, request
//! DTOs, middleware, and the single error-mapping boundary.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
