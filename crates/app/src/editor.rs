//! Item editor
//!
//! The editor either adds a new item or edits an existing one. Which of the
//! two a submission performs is decided by the editor state rather than by
//! inspecting the submitted fields.

use allot::prelude::Item;
use thiserror::Error;

use crate::domain::items::{ItemsService, ItemsServiceError};

/// Editor errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// A form was submitted with no editor open
    #[error("the item editor is not open")]
    Closed,
}

/// Editor mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No editor open
    #[default]
    Idle,

    /// Creating a new item
    Adding,

    /// Editing the item with this name
    Editing(String),
}

/// Work a submitted item should perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Append a new item
    Create(Item),

    /// Replace `old_name` in place
    Update { old_name: String, item: Item },
}

impl EditorState {
    /// Derive the mode from a form's `old_name` field.
    ///
    /// A missing or blank name means the form was opened for a new item.
    pub fn from_old_name(old_name: Option<&str>) -> Self {
        match old_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Self::Editing(name.to_string()),
            None => Self::Adding,
        }
    }

    /// Pair the submitted item with the operation for this mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Closed`] while the editor is idle.
    pub fn submission(&self, item: Item) -> Result<Submission, EditorError> {
        match self {
            Self::Idle => Err(EditorError::Closed),
            Self::Adding => Ok(Submission::Create(item)),
            Self::Editing(old_name) => Ok(Submission::Update {
                old_name: old_name.clone(),
                item,
            }),
        }
    }
}

impl Submission {
    /// Whether this submission creates a new item.
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create(_))
    }

    /// Run the submission against the items service.
    ///
    /// # Errors
    ///
    /// Returns the items service error for the underlying add or update.
    pub async fn apply(self, items: &dyn ItemsService) -> Result<Item, ItemsServiceError> {
        match self {
            Self::Create(item) => items.add_item(item).await,
            Self::Update { old_name, item } => items.update_item(old_name, item).await,
        }
    }
}
