//! Delete Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, items::errors::into_api_error};

/// Delete Item Handler
#[endpoint(
    tags("items"),
    summary = "Delete Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.app_state()?;

    state
        .app
        .items
        .delete_item(name.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use allot_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::test_helpers::items_service;

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items/{name}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_item_success() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_delete_item()
            .once()
            .withf(|name| name == "widget")
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/items/widget")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_twice_returns_404() {
        let mut items = MockItemsService::new();

        items
            .expect_delete_item()
            .once()
            .return_once(|name| Err(ItemsServiceError::NotFound(name)));

        let res = TestClient::delete("http://example.com/items/widget")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
