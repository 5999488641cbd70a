//! Export Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, transfers::errors::into_api_error};

/// Export Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ExportResponse {
    /// Sanitised filename written into the export directory
    pub filename: String,

    /// Size of the written document
    pub bytes: usize,
}

/// Export Handler
///
/// Writes the item list into the server's export directory.
#[endpoint(
    tags("transfers"),
    summary = "Export Items To Server",
    responses(
        (status_code = StatusCode::OK, description = "Export written"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Export could not be written"),
    ),
)]
pub(crate) async fn handler(
    filename: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ExportResponse>, ApiError> {
    let state = depot.app_state()?;

    let saved = state
        .app
        .transfers
        .save_export(filename.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ExportResponse {
        filename: saved.filename,
        bytes: saved.document.len(),
    }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use allot_app::domain::transfers::{MockTransfersService, SavedExport};

    use crate::test_helpers::transfers_service;

    use super::*;

    fn make_service(transfers: MockTransfersService) -> Service {
        transfers_service(transfers, Router::with_path("export").post(handler))
    }

    #[tokio::test]
    async fn test_export_passes_requested_filename() -> TestResult {
        let mut transfers = MockTransfersService::new();

        transfers
            .expect_save_export()
            .once()
            .withf(|filename| filename.as_deref() == Some("groceries"))
            .return_once(|_| {
                Ok(SavedExport {
                    filename: "groceries.json".to_string(),
                    path: PathBuf::from("exports/groceries.json"),
                    document: b"[]".to_vec(),
                })
            });

        let mut res = TestClient::post("http://example.com/export?filename=groceries")
            .send(&make_service(transfers))
            .await;

        let body: ExportResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.filename, "groceries.json");
        assert_eq!(body.bytes, 2);

        Ok(())
    }
}
