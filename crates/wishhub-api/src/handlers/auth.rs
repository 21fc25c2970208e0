//! Auth handlers — register, login, refresh.
//!
//! The access token travels in the response body; the refresh token only
//! ever travels in an httponly cookie, rotated on every successful call.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use wishhub_core::error::AppError;

use crate::dto;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, CelebrantResponse, RefreshResponse};
use crate::extractors::REFRESH_COOKIE;
use crate::state::AppState;

fn refresh_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    dto::validate(&req)?;

    let outcome = state
        .account_service
        .register(&req.email, &req.password)
        .await?;

    let jar = jar.add(refresh_cookie(&outcome.tokens.refresh_token));
    Ok((
        jar,
        Json(AuthResponse {
            token: outcome.tokens.access_token,
            user: CelebrantResponse {
                id: outcome.celebrant.id,
                email: outcome.celebrant.email,
            },
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    dto::validate(&req)?;

    let outcome = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    let jar = jar.add(refresh_cookie(&outcome.tokens.refresh_token));
    Ok((
        jar,
        Json(AuthResponse {
            token: outcome.tokens.access_token,
            user: CelebrantResponse {
                id: outcome.celebrant.id,
                email: outcome.celebrant.email,
            },
        }),
    ))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<RefreshResponse>), AppError> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::token_expired("Refresh token missing"))?;

    let outcome = state.account_service.refresh(&token).await?;

    let jar = jar.add(refresh_cookie(&outcome.tokens.refresh_token));
    Ok((
        jar,
        Json(RefreshResponse {
            token: outcome.tokens.access_token,
        }),
    ))
}
