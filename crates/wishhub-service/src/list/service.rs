//! Gift list management service.

use std::sync::Arc;

use tracing::info;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::ListId;
use wishhub_database::repositories::{ItemRepository, ListRepository};
use wishhub_entity::list::{CreateGiftList, GiftList, UpdateGiftList};

use crate::claim::view::{CelebrantItemView, project_for_celebrant};
use crate::context::CelebrantContext;

use super::slug;

/// A list together with its masked items, as the owner sees it.
#[derive(Debug, Clone)]
pub struct ListWithItems {
    /// The list row.
    pub list: GiftList,
    /// Items through the celebrant projection — always AVAILABLE, no
    /// claim identity.
    pub items: Vec<CelebrantItemView>,
}

/// Manages gift lists on behalf of their owning celebrants.
#[derive(Debug, Clone)]
pub struct ListService {
    list_repo: Arc<ListRepository>,
    item_repo: Arc<ItemRepository>,
}

impl ListService {
    /// Creates a new list service.
    pub fn new(list_repo: Arc<ListRepository>, item_repo: Arc<ItemRepository>) -> Self {
        Self {
            list_repo,
            item_repo,
        }
    }

    /// All non-deleted lists owned by the caller, each with its masked
    /// items.
    pub async fn dashboard(&self, ctx: &CelebrantContext) -> AppResult<Vec<ListWithItems>> {
        let lists = self.list_repo.find_all_owned(ctx.celebrant_id).await?;

        let mut result = Vec::with_capacity(lists.len());
        for list in lists {
            let items = self.item_repo.find_active_by_list(list.id).await?;
            result.push(ListWithItems {
                list,
                items: project_for_celebrant(items),
            });
        }
        Ok(result)
    }

    /// Create a list with a slug derived from its name.
    ///
    /// On a slug collision a random 6-hex suffix is appended. One retry
    /// only; the suffix space makes a second collision practically
    /// impossible, and if it happens anyway the insert fails internal.
    pub async fn create_list(
        &self,
        ctx: &CelebrantContext,
        name: &str,
        image_url: Option<String>,
    ) -> AppResult<GiftList> {
        let base = slug::derive_slug(name);
        let candidate = if self.list_repo.slug_exists(&base).await? {
            slug::with_random_suffix(&base)
        } else {
            base.clone()
        };

        let create = CreateGiftList {
            celebrant_id: ctx.celebrant_id,
            name: name.to_string(),
            slug: candidate,
            image_url,
        };

        let created = match self.list_repo.create(&create).await? {
            Some(list) => list,
            // Lost the insert race on the unsuffixed slug; one suffixed
            // retry, mirroring the existence-check path.
            None => {
                let retry = CreateGiftList {
                    slug: slug::with_random_suffix(&base),
                    ..create
                };
                self.list_repo
                    .create(&retry)
                    .await?
                    .ok_or_else(|| AppError::internal("Slug collision after suffix retry"))?
            }
        };

        info!(list_id = %created.id, slug = %created.slug, "List created");
        Ok(created)
    }

    /// The owner's management view of a list: the list plus its items
    /// through the celebrant projection.
    pub async fn manage_view(
        &self,
        ctx: &CelebrantContext,
        slug: &str,
    ) -> AppResult<ListWithItems> {
        let list = self
            .list_repo
            .find_owned_by_slug(slug, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        let items = self.item_repo.find_active_by_list(list.id).await?;
        Ok(ListWithItems {
            list,
            items: project_for_celebrant(items),
        })
    }

    /// Partially update a list's name or image.
    pub async fn update_list(
        &self,
        ctx: &CelebrantContext,
        slug: &str,
        data: UpdateGiftList,
    ) -> AppResult<GiftList> {
        let list = self
            .list_repo
            .find_owned_by_slug(slug, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        self.list_repo.update(list.id, &data).await
    }

    /// Soft-delete a list.
    pub async fn delete_list(&self, ctx: &CelebrantContext, id: ListId) -> AppResult<()> {
        let list = self
            .list_repo
            .find_owned_by_id(id, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        self.list_repo.soft_delete(list.id).await?;
        info!(list_id = %list.id, "List soft-deleted");
        Ok(())
    }
}
