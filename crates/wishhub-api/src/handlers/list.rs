//! List handlers — celebrant management plus the guest-facing surface.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use wishhub_core::error::AppError;
use wishhub_core::types::ListId;
use wishhub_entity::list::UpdateGiftList;
use wishhub_service::guest::PublicListView;

use crate::dto;
use crate::dto::request::{CreateListRequest, GuestAccessRequest, UpdateListRequest};
use crate::dto::response::{ListResponse, SuccessResponse};
use crate::extractors::{AuthCelebrant, GUEST_COOKIE, GuestSession};
use crate::state::AppState;

/// GET /api/v1/lists
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthCelebrant,
) -> Result<Json<Vec<ListResponse>>, AppError> {
    let lists = state.list_service.dashboard(auth.context()).await?;
    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

/// POST /api/v1/lists
pub async fn create_list(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Json(req): Json<CreateListRequest>,
) -> Result<Json<ListResponse>, AppError> {
    dto::validate(&req)?;

    let image_url = req.image_url.filter(|url| !url.is_empty());
    let list = state
        .list_service
        .create_list(auth.context(), &req.name, image_url)
        .await?;

    Ok(Json(ListResponse::from(list)))
}

/// GET /api/v1/lists/{slug}/manage
pub async fn manage_view(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(slug): Path<String>,
) -> Result<Json<ListResponse>, AppError> {
    let view = state.list_service.manage_view(auth.context(), &slug).await?;
    Ok(Json(ListResponse::from(view)))
}

/// PUT/PATCH /api/v1/lists/{slug}/manage
pub async fn update_list(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(slug): Path<String>,
    Json(req): Json<UpdateListRequest>,
) -> Result<Json<ListResponse>, AppError> {
    dto::validate(&req)?;

    let list = state
        .list_service
        .update_list(
            auth.context(),
            &slug,
            UpdateGiftList {
                name: req.name,
                image_url: req.image_url.filter(|url| !url.is_empty()),
            },
        )
        .await?;

    Ok(Json(ListResponse::from(list)))
}

/// DELETE /api/v1/lists/{id}
pub async fn delete_list(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(id): Path<ListId>,
) -> Result<StatusCode, AppError> {
    state.list_service.delete_list(auth.context(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/lists/{slug}/access — public; issues the guest session.
pub async fn grant_access(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(slug): Path<String>,
    Json(req): Json<GuestAccessRequest>,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    dto::validate(&req)?;

    let (_access, token) = state
        .guest_service
        .grant_access(&slug, &req.email, &req.language)
        .await?;

    let cookie = Cookie::build((GUEST_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build();

    Ok((jar.add(cookie), Json(SuccessResponse::ok())))
}

/// GET /api/v1/lists/{slug} — guest session required.
pub async fn public_view(
    State(state): State<AppState>,
    guest: GuestSession,
    Path(slug): Path<String>,
) -> Result<Json<PublicListView>, AppError> {
    let view = state
        .guest_service
        .public_view(guest.context(), &slug)
        .await?;
    Ok(Json(view))
}

/// GET /api/v1/lists/{slug}/preview — the owner's guest's-eye view.
pub async fn preview(
    State(state): State<AppState>,
    auth: AuthCelebrant,
    Path(slug): Path<String>,
) -> Result<Json<PublicListView>, AppError> {
    let view = state
        .guest_service
        .preview_for_celebrant(auth.context(), &slug)
        .await?;
    Ok(Json(view))
}
