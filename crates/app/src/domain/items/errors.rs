//! Items service errors.

use allot::prelude::ItemError;
use thiserror::Error;

use crate::domain::items::repository::RepositoryError;

/// Items service errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ItemsServiceError {
    /// Name already taken
    #[error("an item named {0:?} already exists")]
    AlreadyExists(String),

    /// No item with this name
    #[error("item {0:?} not found")]
    NotFound(String),

    /// Item failed validation
    #[error("invalid item: {0}")]
    InvalidData(#[from] ItemError),
}

impl From<RepositoryError> for ItemsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Conflict(name) => Self::AlreadyExists(name),
            RepositoryError::Missing(name) => Self::NotFound(name),
        }
    }
}
