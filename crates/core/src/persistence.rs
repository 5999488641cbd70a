//! JSON import and export of item sets.
//!
//! Exported documents are a JSON array of items:
//!
//! ```json
//! [
//!   {
//!     "name": "widget",
//!     "lowerBound": 0,
//!     "upperBound": null,
//!     "cost": 2.5,
//!     "profit": 4.0,
//!     "multiplier": 1
//!   }
//! ]
//! ```
//!
//! Imported documents are untrusted: every item is re-validated and names
//! must be unique.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::items::{Item, ItemError};

/// Errors raised while reading or writing item documents.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The document is not a valid JSON item array.
    #[error("malformed item document: {0}")]
    Json(#[from] serde_json::Error),

    /// An item in the document violates the item invariants.
    #[error("item {index} is invalid: {source}")]
    InvalidItem {
        /// Position of the item in the document
        index: usize,

        /// Violated invariant
        #[source]
        source: ItemError,
    },

    /// Two items in the document share a name.
    #[error("duplicate item name in document: {0}")]
    DuplicateName(String),
}

/// Serialise items to a pretty-printed JSON document.
///
/// # Errors
///
/// Returns a [`FormatError`] if serialisation fails.
pub fn export(items: &[Item]) -> Result<Vec<u8>, FormatError> {
    Ok(serde_json::to_vec_pretty(items)?)
}

/// Parse and validate items from a JSON document.
///
/// # Errors
///
/// Returns a [`FormatError`] if the document is malformed, contains an
/// invalid item or repeats a name.
pub fn import(bytes: &[u8]) -> Result<Vec<Item>, FormatError> {
    let items: Vec<Item> = serde_json::from_slice(bytes)?;

    let mut names = FxHashSet::default();

    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|source| FormatError::InvalidItem { index, source })?;

        if !names.insert(item.name.as_str()) {
            return Err(FormatError::DuplicateName(item.name.clone()));
        }
    }

    Ok(items)
}
