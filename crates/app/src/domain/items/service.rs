//! Items service.

use allot::prelude::Item;
use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::items::{errors::ItemsServiceError, repository::MemoryItemsRepository},
    store::Store,
};

/// Items held in the shared store.
///
/// Each write holds the store's write lock across its check and modify.
#[derive(Debug, Clone)]
pub struct MemoryItemsService {
    store: Store,
    repository: MemoryItemsRepository,
}

impl MemoryItemsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: MemoryItemsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsService for MemoryItemsService {
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError> {
        let state = self.store.read().await;

        Ok(self.repository.list_items(&state.items))
    }

    async fn count_items(&self) -> Result<usize, ItemsServiceError> {
        Ok(self.store.read().await.items.len())
    }

    async fn add_item(&self, item: Item) -> Result<Item, ItemsServiceError> {
        item.validate()?;

        let mut state = self.store.write().await;

        let created = self.repository.create_item(&mut state.items, item)?;

        debug!(item = %created.name, "added item");

        Ok(created)
    }

    async fn update_item(&self, old_name: String, item: Item) -> Result<Item, ItemsServiceError> {
        let mut state = self.store.write().await;

        if !state.items.iter().any(|existing| existing.name == old_name) {
            return Err(ItemsServiceError::NotFound(old_name));
        }

        item.validate()?;

        let updated = self
            .repository
            .update_item(&mut state.items, &old_name, item)?;

        debug!(from = %old_name, to = %updated.name, "updated item");

        Ok(updated)
    }

    async fn delete_item(&self, name: String) -> Result<(), ItemsServiceError> {
        let mut state = self.store.write().await;

        let removed = self.repository.delete_item(&mut state.items, &name)?;

        debug!(item = %removed.name, "deleted item");

        Ok(())
    }

    async fn clear_items(&self) -> Result<usize, ItemsServiceError> {
        let mut state = self.store.write().await;

        let removed = self.repository.clear_items(&mut state.items);

        info!(removed, "cleared items");

        Ok(removed)
    }

    async fn replace_items(&self, items: Vec<Item>) -> Result<usize, ItemsServiceError> {
        for (index, item) in items.iter().enumerate() {
            item.validate()?;

            if items
                .iter()
                .take(index)
                .any(|earlier| earlier.name == item.name)
            {
                return Err(ItemsServiceError::AlreadyExists(item.name.clone()));
            }
        }

        let mut state = self.store.write().await;

        let count = self.repository.replace_items(&mut state.items, items);

        info!(count, "replaced items");

        Ok(count)
    }
}

/// Item list maintenance.
#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves all items in insertion order.
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError>;

    /// Number of stored items.
    async fn count_items(&self) -> Result<usize, ItemsServiceError>;

    /// Appends a new item, rejecting invalid items and duplicate names.
    async fn add_item(&self, item: Item) -> Result<Item, ItemsServiceError>;

    /// Replaces the item named `old_name`, keeping its position.
    async fn update_item(&self, old_name: String, item: Item) -> Result<Item, ItemsServiceError>;

    /// Removes the item with the given name.
    async fn delete_item(&self, name: String) -> Result<(), ItemsServiceError>;

    /// Removes every item, returning how many were removed.
    async fn clear_items(&self) -> Result<usize, ItemsServiceError>;

    /// Swaps the whole item list for `items` in one step.
    async fn replace_items(&self, items: Vec<Item>) -> Result<usize, ItemsServiceError>;
}
