//! Guest access grants and the guest-facing list view.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use wishhub_auth::guest::GuestTokenIssuer;
use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::{GuestAccessId, ListId};
use wishhub_database::repositories::{GuestAccessRepository, ItemRepository, ListRepository};
use wishhub_entity::guest::GuestAccess;
use wishhub_entity::list::GiftList;

use crate::claim::view::{GuestItemView, project_for_guest};
use crate::context::{CelebrantContext, GuestContext};

/// The public projection of a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicListView {
    /// List identifier.
    pub id: ListId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Cover image, if any.
    pub image_url: Option<String>,
    /// Items visible to the caller, guest-masked.
    pub items: Vec<GuestItemView>,
}

/// Grants guest access and renders the guest view.
#[derive(Debug, Clone)]
pub struct GuestService {
    list_repo: Arc<ListRepository>,
    item_repo: Arc<ItemRepository>,
    guest_repo: Arc<GuestAccessRepository>,
    token_issuer: Arc<GuestTokenIssuer>,
}

impl GuestService {
    /// Creates a new guest service.
    pub fn new(
        list_repo: Arc<ListRepository>,
        item_repo: Arc<ItemRepository>,
        guest_repo: Arc<GuestAccessRepository>,
        token_issuer: Arc<GuestTokenIssuer>,
    ) -> Self {
        Self {
            list_repo,
            item_repo,
            guest_repo,
            token_issuer,
        }
    }

    /// Grant (or refresh) viewing rights on a list for an email, and issue
    /// the session token that carries those rights.
    pub async fn grant_access(
        &self,
        slug: &str,
        email: &str,
        language: &str,
    ) -> AppResult<(GuestAccess, String)> {
        let list = self
            .list_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        let access = self.guest_repo.upsert(list.id, email, language).await?;
        let token = self.token_issuer.issue(access.id, list.id, &access.email)?;

        info!(list_id = %list.id, guest_access_id = %access.id, "Guest access granted");
        Ok((access, token))
    }

    /// The guest view of a list.
    ///
    /// The session must belong to the requested list; a session replayed
    /// against any other list fails exactly like an absent session.
    pub async fn public_view(&self, ctx: &GuestContext, slug: &str) -> AppResult<PublicListView> {
        let list = self
            .list_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        if list.id != ctx.list_id {
            return Err(AppError::unauthorized_guest("Guest session missing"));
        }

        self.render(list, ctx.guest_access_id).await
    }

    /// The owner's preview of their list as guests see it.
    ///
    /// Rendered under a synthetic guest identity derived from the
    /// celebrant id, which never matches a real claim: claimed items
    /// disappear and `isClaimedByMe` is always false. The synthetic
    /// identity carries no claim capability anywhere else.
    pub async fn preview_for_celebrant(
        &self,
        ctx: &CelebrantContext,
        slug: &str,
    ) -> AppResult<PublicListView> {
        let list = self
            .list_repo
            .find_owned_by_slug(slug, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        let synthetic = GuestAccessId::synthetic_for_celebrant(ctx.celebrant_id);
        self.render(list, synthetic).await
    }

    async fn render(&self, list: GiftList, caller: GuestAccessId) -> AppResult<PublicListView> {
        let rows = self.item_repo.find_active_by_list_with_claims(list.id).await?;
        Ok(PublicListView {
            id: list.id,
            name: list.name,
            slug: list.slug,
            image_url: list.image_url,
            items: project_for_guest(rows, caller),
        })
    }
}
