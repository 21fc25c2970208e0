//! Gift item management service.

use std::sync::Arc;

use tracing::info;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::traits::NotificationDispatcher;
use wishhub_core::types::{ItemId, ListId};
use wishhub_database::repositories::{ClaimRepository, ItemRepository, ListRepository};
use wishhub_entity::item::{CreateGiftItem, GiftItem, PreferenceLevel, UpdateGiftItem};

use crate::context::CelebrantContext;

/// Manages gift items on behalf of their owning celebrants.
#[derive(Debug, Clone)]
pub struct ItemService {
    list_repo: Arc<ListRepository>,
    item_repo: Arc<ItemRepository>,
    claim_repo: Arc<ClaimRepository>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(
        list_repo: Arc<ListRepository>,
        item_repo: Arc<ItemRepository>,
        claim_repo: Arc<ClaimRepository>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            list_repo,
            item_repo,
            claim_repo,
            dispatcher,
        }
    }

    /// Add an item to one of the caller's lists.
    pub async fn add_item(
        &self,
        ctx: &CelebrantContext,
        list_id: ListId,
        name: &str,
        description: Option<String>,
        url: Option<String>,
        preference: PreferenceLevel,
    ) -> AppResult<GiftItem> {
        let list = self
            .list_repo
            .find_owned_by_id(list_id, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::list_not_found("List not found"))?;

        let item = self
            .item_repo
            .create(&CreateGiftItem {
                list_id: list.id,
                name: name.to_string(),
                description,
                url,
                preference,
            })
            .await?;

        info!(item_id = %item.id, list_id = %list.id, "Item created");
        Ok(item)
    }

    /// Partially update one of the caller's items.
    pub async fn update_item(
        &self,
        ctx: &CelebrantContext,
        item_id: ItemId,
        data: UpdateGiftItem,
    ) -> AppResult<GiftItem> {
        let item = self
            .item_repo
            .find_owned(item_id, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::item_not_found("Item not found"))?;

        self.item_repo.update(item.id, &data).await
    }

    /// Soft-delete one of the caller's items.
    ///
    /// When the item is claimed, the holding guest is notified on a
    /// spawned task. The send is never awaited and its failure never
    /// surfaces: deletion succeeds regardless.
    pub async fn remove_item(&self, ctx: &CelebrantContext, item_id: ItemId) -> AppResult<()> {
        let item = self
            .item_repo
            .find_owned(item_id, ctx.celebrant_id)
            .await?
            .ok_or_else(|| AppError::item_not_found("Item not found"))?;

        let notice = self.claim_repo.soft_delete_item(item.id).await?;

        info!(item_id = %item.id, was_claimed = notice.is_some(), "Item soft-deleted");

        if let Some(notice) = notice {
            let dispatcher = Arc::clone(&self.dispatcher);
            tokio::spawn(async move {
                dispatcher.dispatch(notice).await;
            });
        }

        Ok(())
    }
}
