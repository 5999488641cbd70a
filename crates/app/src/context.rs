//! App Context

use std::{io, path::PathBuf, sync::Arc};

use allot::prelude::Budget;
use thiserror::Error;

use crate::{
    domain::{
        budget::{BudgetService, MemoryBudgetService},
        items::{ItemsService, MemoryItemsService},
        plans::{MemoryPlansService, PlansService},
        transfers::{MemoryTransfersService, TransfersService},
    },
    store::Store,
};

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The export directory could not be created
    #[error("failed to create export directory {path}")]
    ExportDir {
        /// Directory that was being created
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}

/// Settings needed to assemble the services.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory export documents are written into
    pub export_dir: PathBuf,

    /// Budget the store starts with
    pub default_budget: Budget,
}

/// The services a front end drives, all sharing one store.
#[derive(Clone)]
pub struct AppContext {
    /// Item list maintenance
    pub items: Arc<dyn ItemsService>,

    /// Budget reads and updates
    pub budget: Arc<dyn BudgetService>,

    /// Model building and solving
    pub plans: Arc<dyn PlansService>,

    /// Export and import documents
    pub transfers: Arc<dyn TransfersService>,
}

impl AppContext {
    /// Build services over a fresh in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error when the export directory cannot be created.
    pub async fn initialise(config: AppConfig) -> Result<Self, AppInitError> {
        tokio::fs::create_dir_all(&config.export_dir)
            .await
            .map_err(|source| AppInitError::ExportDir {
                path: config.export_dir.clone(),
                source,
            })?;

        Ok(Self::from_store(
            Store::with_budget(config.default_budget),
            config.export_dir,
        ))
    }

    /// Build services sharing an existing store.
    #[must_use]
    pub fn from_store(store: Store, export_dir: PathBuf) -> Self {
        let items = MemoryItemsService::new(store.clone());

        Self {
            items: Arc::new(items.clone()),
            budget: Arc::new(MemoryBudgetService::new(store.clone())),
            plans: Arc::new(MemoryPlansService::new(store)),
            transfers: Arc::new(MemoryTransfersService::new(items, export_dir)),
        }
    }
}
