//! Item handlers — celebrant-only CRUD.
//!
//! Create and update responses go through the celebrant projection like
//! every other celebrant-facing view, so a just-claimed item never leaks
//! its true status back to its owner.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use wishhub_core::error::AppError;
use wishhub_core::types::{ItemId, ListId};
use wishhub_entity::item::UpdateGiftItem;
use wishhub_service::claim::CelebrantItemView;
use wishhub_service::claim::view::project_item_for_celebrant;

use crate::dto;
use crate::dto::request::{CreateItemRequest, UpdateItemRequest};
use crate::extractors::AuthCelebrant;
use crate::state::AppState;

/// POST /api/v1/items/list/{list_id}
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(list_id): Path<ListId>,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<CelebrantItemView>, AppError> {
    dto::validate(&req)?;

    let item = state
        .item_service
        .add_item(
            auth.context(),
            list_id,
            &req.name,
            req.description,
            req.url.filter(|url| !url.is_empty()),
            req.preference,
        )
        .await?;

    Ok(Json(project_item_for_celebrant(item)))
}

/// PATCH /api/v1/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(id): Path<ItemId>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<CelebrantItemView>, AppError> {
    dto::validate(&req)?;

    let item = state
        .item_service
        .update_item(
            auth.context(),
            id,
            UpdateGiftItem {
                name: req.name,
                description: req.description,
                url: req.url.filter(|url| !url.is_empty()),
                preference: req.preference,
            },
        )
        .await?;

    Ok(Json(project_item_for_celebrant(item)))
}

/// DELETE /api/v1/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, AppError> {
    state.item_service.remove_item(auth.context(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
