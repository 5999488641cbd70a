//! Variable Store
//!
//! Process-wide, in-memory item list and budget shared by every service.

use std::sync::Arc;

use allot::prelude::{Budget, Item};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The item list and budget guarded by the store lock.
#[derive(Debug, Default)]
pub struct StoreState {
    pub(crate) items: Vec<Item>,
    pub(crate) budget: Budget,
}

/// A consistent copy of the store taken under a single read lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Items in insertion order
    pub items: Vec<Item>,

    /// Current budget
    pub budget: Budget,
}

/// Shared handle to the store. Clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
}

impl Store {
    /// An empty store with a zero budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store starting from the given budget.
    #[must_use]
    pub fn with_budget(budget: Budget) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                items: Vec::new(),
                budget,
            })),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }

    /// Copy the items and budget so a solve never observes a partial edit.
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.read().await;

        Snapshot {
            items: state.items.clone(),
            budget: state.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn new_store_is_empty_with_zero_budget() {
        let snapshot = Store::new().snapshot().await;

        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.budget, Budget::ZERO);
    }

    #[tokio::test]
    async fn clones_share_state() -> TestResult {
        let store = Store::with_budget(Budget::new(25.0)?);
        let other = store.clone();

        store.write().await.items.push(Item::new("widget", 1.0, 2.0));

        let snapshot = other.snapshot().await;

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.budget, Budget::new(25.0)?);

        Ok(())
    }
}
