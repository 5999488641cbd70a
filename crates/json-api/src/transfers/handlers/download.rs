//! Download Handler

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    oapi::extract::QueryParam,
    prelude::*,
};

use crate::{errors::ApiError, extensions::*, transfers::errors::into_api_error};

/// Download Handler
///
/// Saves the item list into the export directory and returns it as a JSON
/// attachment.
#[endpoint(
    tags("transfers"),
    summary = "Download Items",
    responses(
        (status_code = StatusCode::OK, description = "Export document attachment"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Export could not be written"),
    ),
)]
pub(crate) async fn handler(
    filename: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, ApiError> {
    let state = depot.app_state()?;

    let saved = state
        .app
        .transfers
        .save_export(filename.into_inner())
        .await
        .map_err(into_api_error)?;

    res.add_header(CONTENT_TYPE, "application/json", true)
        .or_500("failed to set content type header")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", saved.filename),
            true,
        )
        .or_500("failed to set content disposition header")?
        .write_body(saved.document)
        .or_500("failed to write download body")?;

    Ok(StatusCode::OK)
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
        transfers_service(transfers, Router::with_path("download").get(handler))
    }

    #[tokio::test]
    async fn test_download_returns_attachment() -> TestResult {
        let document = br#"[{"name":"a"}]"#.to_vec();

        let mut transfers = MockTransfersService::new();

        transfers
            .expect_save_export()
            .once()
            .withf(Option::is_none)
            .return_once(move |_| {
                Ok(SavedExport {
                    filename: "variables.json".to_string(),
                    path: PathBuf::from("exports/variables.json"),
                    document,
                })
            });

        let mut res = TestClient::get("http://example.com/download")
            .send(&make_service(transfers))
            .await;

        let disposition = res
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            disposition.as_deref(),
            Some("attachment; filename=\"variables.json\"")
        );
        assert_eq!(res.take_string().await?, r#"[{"name":"a"}]"#);

        Ok(())
    }
}
