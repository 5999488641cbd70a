//! Clear Items Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearedResponse {
    /// Number of items removed
    pub removed: usize,
}

/// Clear Items Handler
#[endpoint(tags("items"), summary = "Remove All Items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClearedResponse>, ApiError> {
    let state = depot.app_state()?;

    let removed = state
        .app
        .items
        .clear_items()
        .await
        .or_500("failed to clear items")?;

    Ok(Json(ClearedResponse { removed }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use allot_app::domain::items::MockItemsService;

    use crate::test_helpers::items_service;

    use super::*;

    #[tokio::test]
    async fn test_clear_items_reports_removed_count() -> TestResult {
        let mut items = MockItemsService::new();

        items.expect_clear_items().once().return_once(|| Ok(3));

        let mut res = TestClient::delete("http://example.com/items")
            .send(&items_service(
                items,
                Router::with_path("items").delete(handler),
            ))
            .await;

        let body: ClearedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.removed, 3);

        Ok(())
    }
}
