//! Transfers service errors.

use std::{io, path::PathBuf};

use allot::prelude::FormatError;
use thiserror::Error;

use crate::domain::items::ItemsServiceError;

/// Errors raised while exporting or importing items.
#[derive(Debug, Error)]
pub enum TransfersServiceError {
    /// The document could not be written or parsed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The items service refused the imported items.
    #[error(transparent)]
    Items(#[from] ItemsServiceError),

    /// The export file could not be written.
    #[error("failed to write export to {path}")]
    Io {
        /// File being written
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}
