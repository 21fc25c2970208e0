//! Claim handlers — guest session required.

use axum::Json;
use axum::extract::{Path, State};

use wishhub_core::error::AppError;
use wishhub_core::types::ItemId;

use crate::dto::response::ClaimResponse;
use crate::extractors::GuestSession;
use crate::state::AppState;

/// POST /api/v1/items/{id}/claim
pub async fn claim_item(
    State(state): State<AppState>,
    guest: GuestSession,
    Path(id): Path<ItemId>,
) -> Result<Json<ClaimResponse>, AppError> {
    let status = state.claim_engine.claim(guest.context(), id).await?;
    Ok(Json(ClaimResponse {
        success: true,
        status,
    }))
}

/// POST /api/v1/items/{id}/unclaim
pub async fn unclaim_item(
    State(state): State<AppState>,
    guest: GuestSession,
    Path(id): Path<ItemId>,
) -> Result<Json<ClaimResponse>, AppError> {
    let status = state.claim_engine.unclaim(guest.context(), id).await?;
    Ok(Json(ClaimResponse {
        success: true,
        status,
    }))
}
