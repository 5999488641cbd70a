//! Liveness check.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Always `ok` when the store is readable
    pub status: String,

    /// Number of items currently stored
    pub items: usize,
}

/// Healthcheck Handler
///
/// Reads the store so a wedged lock shows up as a failed healthcheck.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let items = depot
        .app_state()?
        .app
        .items
        .count_items()
        .await
        .or_500("failed to read items for healthcheck")?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        items,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use allot_app::domain::items::MockItemsService;

    use crate::test_helpers::items_service;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck_reports_item_count() -> TestResult {
        let mut items = MockItemsService::new();

        items.expect_list_items().never();
        items.expect_count_items().once().return_once(|| Ok(1));

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&items_service(
                items,
                Router::with_path("healthcheck").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert_eq!(response.items, 1);

        Ok(())
    }
}
