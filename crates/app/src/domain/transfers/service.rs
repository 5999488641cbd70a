//! Transfers service.

use std::path::PathBuf;

use allot::prelude::persistence;
use async_trait::async_trait;
use mockall::automock;
use tokio::fs;
use tracing::info;

use crate::domain::{
    items::{ItemsService, MemoryItemsService},
    transfers::{
        errors::TransfersServiceError,
        filenames::{DEFAULT_EXPORT_FILENAME, safe_filename},
    },
};

/// An export document written to the export directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedExport {
    /// Sanitised filename
    pub filename: String,

    /// Where the document was written
    pub path: PathBuf,

    /// Document contents
    pub document: Vec<u8>,
}

/// Export and import over the items service.
///
/// Imports are parsed here and stored through
/// [`ItemsService::replace_items`].
#[derive(Debug, Clone)]
pub struct MemoryTransfersService {
    items: MemoryItemsService,
    export_dir: PathBuf,
}

impl MemoryTransfersService {
    #[must_use]
    pub fn new(items: MemoryItemsService, export_dir: PathBuf) -> Self {
        Self { items, export_dir }
    }
}

#[async_trait]
impl TransfersService for MemoryTransfersService {
    async fn export_items(&self) -> Result<Vec<u8>, TransfersServiceError> {
        let items = self.items.list_items().await?;

        Ok(persistence::export(&items)?)
    }

    async fn save_export(
        &self,
        filename: Option<String>,
    ) -> Result<SavedExport, TransfersServiceError> {
        let filename = filename.map_or_else(
            || DEFAULT_EXPORT_FILENAME.to_string(),
            |raw| safe_filename(&raw),
        );

        let document = self.export_items().await?;
        let path = self.export_dir.join(&filename);

        fs::create_dir_all(&self.export_dir)
            .await
            .map_err(|source| TransfersServiceError::Io {
                path: self.export_dir.clone(),
                source,
            })?;

        fs::write(&path, &document)
            .await
            .map_err(|source| TransfersServiceError::Io {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), bytes = document.len(), "saved export");

        Ok(SavedExport {
            filename,
            path,
            document,
        })
    }

    async fn import_items(&self, document: Vec<u8>) -> Result<usize, TransfersServiceError> {
        let items = persistence::import(&document)?;

        let count = self.items.replace_items(items).await?;

        info!(count, bytes = document.len(), "imported items");

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait TransfersService: Send + Sync {
    /// Serialises the current item list.
    async fn export_items(&self) -> Result<Vec<u8>, TransfersServiceError>;

    /// Serialises the item list and writes it into the export directory.
    async fn save_export(
        &self,
        filename: Option<String>,
    ) -> Result<SavedExport, TransfersServiceError>;

    /// Replaces the item list with a validated document, returning the new count.
    ///
    /// The store is left untouched when the document is rejected.
    async fn import_items(&self, document: Vec<u8>) -> Result<usize, TransfersServiceError>;
}

#[cfg(test)]
mod tests {
    use allot::prelude::{FormatError, Item};
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn export_then_import_restores_items() -> TestResult {
        let ctx = TestContext::new();

        let items = vec![
            Item::new("A", 1.0, 1.0).with_bounds(0, Some(10)),
            Item::new("B", 2.0, 5.0).with_multiplier(4),
        ];

        ctx.items.replace_items(items.clone()).await?;

        let document = ctx.transfers.export_items().await?;

        ctx.items.clear_items().await?;

        assert_eq!(ctx.transfers.import_items(document).await?, 2);
        assert_eq!(ctx.items.list_items().await?, items);

        Ok(())
    }

    #[tokio::test]
    async fn import_replaces_rather_than_appends() -> TestResult {
        let ctx = TestContext::new();

        ctx.items.add_item(Item::new("old", 1.0, 1.0)).await?;

        let document = br#"[{"name":"new","cost":2,"profit":3,"multiplier":2}]"#;

        assert_eq!(ctx.transfers.import_items(document.to_vec()).await?, 1);
        assert_eq!(
            ctx.items.list_items().await?,
            [Item::new("new", 2.0, 3.0).with_multiplier(2)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn import_of_malformed_document_keeps_existing_items() -> TestResult {
        let ctx = TestContext::new();

        ctx.items.add_item(Item::new("keep", 1.0, 1.0)).await?;

        let result = ctx.transfers.import_items(b"{oops".to_vec()).await;

        assert!(
            matches!(result, Err(TransfersServiceError::Format(FormatError::Json(_)))),
            "expected Format, got {result:?}"
        );
        assert_eq!(ctx.items.list_items().await?, [Item::new("keep", 1.0, 1.0)]);

        Ok(())
    }

    #[tokio::test]
    async fn import_of_duplicate_names_is_rejected() {
        let ctx = TestContext::new();

        let document = br#"[{"name":"x","cost":1,"profit":1},{"name":"x","cost":2,"profit":3}]"#;

        let result = ctx.transfers.import_items(document.to_vec()).await;

        assert!(
            matches!(
                result,
                Err(TransfersServiceError::Format(FormatError::DuplicateName(_)))
            ),
            "expected DuplicateName, got {result:?}"
        );
    }

    #[tokio::test]
    async fn save_export_writes_sanitised_file() -> TestResult {
        let ctx = TestContext::new();

        ctx.items.add_item(Item::new("widget", 2.5, 4.0)).await?;

        let saved = ctx
            .transfers
            .save_export(Some("../my list".to_string()))
            .await?;

        assert_eq!(saved.filename, "my_list.json");
        assert_eq!(saved.path, ctx.export_dir().join("my_list.json"));
        assert_eq!(std::fs::read(&saved.path)?, saved.document);

        Ok(())
    }

    #[tokio::test]
    async fn save_export_without_filename_uses_default() -> TestResult {
        let ctx = TestContext::new();

        let saved = ctx.transfers.save_export(None).await?;

        assert_eq!(saved.filename, DEFAULT_EXPORT_FILENAME);
        assert_eq!(saved.document, b"[]");

        Ok(())
    }
}
