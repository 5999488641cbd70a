//! Items Repository

use allot::prelude::Item;
use thiserror::Error;

/// Storage-level failures, mapped onto service errors by the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub(crate) enum RepositoryError {
    #[error("an item named {0:?} already exists")]
    Conflict(String),
    #[error("item {0:?} not found")]
    Missing(String),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryItemsRepository;

impl MemoryItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn list_items(&self, items: &[Item]) -> Vec<Item> {
        items.to_vec()
    }

    pub(crate) fn create_item(
        &self,
        items: &mut Vec<Item>,
        item: Item,
    ) -> Result<Item, RepositoryError> {
        if position(items, &item.name).is_some() {
            return Err(RepositoryError::Conflict(item.name));
        }

        items.push(item.clone());

        Ok(item)
    }

    /// Replace `old_name` in place, keeping its position in the list.
    pub(crate) fn update_item(
        &self,
        items: &mut [Item],
        old_name: &str,
        item: Item,
    ) -> Result<Item, RepositoryError> {
        let index = position(items, old_name)
            .ok_or_else(|| RepositoryError::Missing(old_name.to_string()))?;

        if item.name != old_name && position(items, &item.name).is_some() {
            return Err(RepositoryError::Conflict(item.name));
        }

        let slot = items
            .get_mut(index)
            .ok_or_else(|| RepositoryError::Missing(old_name.to_string()))?;

        *slot = item.clone();

        Ok(item)
    }

    pub(crate) fn delete_item(
        &self,
        items: &mut Vec<Item>,
        name: &str,
    ) -> Result<Item, RepositoryError> {
        let index =
            position(items, name).ok_or_else(|| RepositoryError::Missing(name.to_string()))?;

        Ok(items.remove(index))
    }

    /// Remove every item, returning how many were removed.
    pub(crate) fn clear_items(&self, items: &mut Vec<Item>) -> usize {
        let removed = items.len();

        items.clear();

        removed
    }

    pub(crate) fn replace_items(&self, items: &mut Vec<Item>, replacement: Vec<Item>) -> usize {
        *items = replacement;

        items.len()
    }
}

fn position(items: &[Item], name: &str) -> Option<usize> {
    items.iter().position(|item| item.name == name)
}
