//! Import Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, transfers::errors::into_api_error};

/// Import Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImportResponse {
    /// Number of items now in the store
    pub imported: usize,
}

/// Import Handler
///
/// Replaces every item with the contents of an uploaded export document.
/// Nothing changes when the document is rejected.
#[endpoint(
    tags("transfers"),
    summary = "Import Items",
    responses(
        (status_code = StatusCode::OK, description = "Items replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid document"),
        (status_code = StatusCode::PAYLOAD_TOO_LARGE, description = "Upload too large"),
    ),
)]
#[tracing::instrument(name = "transfers.import", skip(req, depot), err(Debug))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ImportResponse>, ApiError> {
    let state = depot.app_state()?;

    let Some(file) = req.file("file").await else {
        return Err(ApiError::bad_request("No file selected for importing."));
    };

    if file.name().is_none_or(|name| name.trim().is_empty()) {
        return Err(ApiError::bad_request("No file selected for importing."));
    }

    if file.size() > state.max_upload_bytes {
        return Err(ApiError::payload_too_large(format!(
            "Upload exceeds the {} byte limit",
            state.max_upload_bytes
        )));
    }

    let document = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded file")?;

    let imported = state
        .app
        .transfers
        .import_items(document)
        .await
        .map_err(into_api_error)?;

    tracing::info!(imported, "imported items");

    Ok(Json(ImportResponse { imported }))
}

#[cfg(test)]
mod tests {
    use allot::prelude::FormatError;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use allot_app::domain::transfers::MockTransfersService;

    use crate::{errors::ErrorResponse, test_helpers::transfers_service};

    use super::*;

    const BOUNDARY: &str = "allot-test-boundary";

    fn make_service(transfers: MockTransfersService) -> Service {
        transfers_service(transfers, Router::with_path("import").post(handler))
    }

    fn multipart(filename: &str, contents: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/json\r\n\
             \r\n\
             {contents}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    fn upload(filename: &str, contents: &str) -> salvo::test::RequestBuilder {
        TestClient::post("http://example.com/import")
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(multipart(filename, contents))
    }

    #[tokio::test]
    async fn test_import_replaces_items() -> TestResult {
        let document = r#"[{"name":"a","cost":1,"profit":2}]"#;

        let mut transfers = MockTransfersService::new();

        transfers
            .expect_import_items()
            .once()
            .withf(move |bytes| bytes.as_slice() == document.as_bytes())
            .return_once(|_| Ok(1));

        let mut res = upload("items.json", document)
            .send(&make_service(transfers))
            .await;

        let body: ImportResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.imported, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_import_rejected_document_returns_400() -> TestResult {
        let mut transfers = MockTransfersService::new();

        transfers
            .expect_import_items()
            .once()
            .return_once(|_| Err(FormatError::DuplicateName("a".to_string()).into()));

        let mut res = upload("items.json", r#"[{"name":"a"},{"name":"a"}]"#)
            .send(&make_service(transfers))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.message,
            "Import failed: duplicate item name in document: a"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_import_without_file_returns_400() -> TestResult {
        let mut transfers = MockTransfersService::new();

        transfers.expect_import_items().never();

        let mut res = TestClient::post("http://example.com/import")
            .send(&make_service(transfers))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "No file selected for importing.");

        Ok(())
    }

    #[tokio::test]
    async fn test_import_oversized_upload_returns_413() {
        let mut transfers = MockTransfersService::new();

        transfers.expect_import_items().never();

        let oversized = "x".repeat(2 * 1024);

        let res = upload("items.json", &oversized)
            .send(&make_service(transfers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::PAYLOAD_TOO_LARGE));
    }
}
