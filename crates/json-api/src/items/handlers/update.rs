//! Update Item Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    errors::ApiError,
    extensions::*,
    items::{
        errors::into_api_error,
        requests::{ItemRequest, ItemResponse},
    },
};

/// Item Update Handler
///
/// Replaces the named item, keeping its position. The body may rename it.
#[endpoint(
    tags("items"),
    summary = "Update Item",
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::CONFLICT, description = "Another item already has the new name"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item"),
    ),
)]
#[tracing::instrument(
    name = "items.update",
    skip(name, json, depot),
    fields(
        old_name = tracing::field::Empty,
        new_name = tracing::field::Empty
    ),
    err(Debug)
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    json: JsonBody<ItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.app_state()?;
    let old_name = name.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("old_name", tracing::field::display(&old_name));
    span.record("new_name", tracing::field::display(&request.name));

    let updated = state
        .app
        .items
        .update_item(old_name, request.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(item = %updated.name, "updated item");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use allot::prelude::Item;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use allot_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::{errors::ErrorResponse, test_helpers::items_service};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items/{name}").put(handler))
    }

    #[tokio::test]
    async fn test_update_item_success() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .withf(|old_name, item| old_name == "widget" && *item == Item::new("gadget", 3.0, 5.0))
            .return_once(|_, item| Ok(item));

        let mut res = TestClient::put("http://example.com/items/widget")
            .json(&json!({ "name": "gadget", "cost": 3.0, "profit": 5.0 }))
            .send(&make_service(items))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "gadget");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_not_found_returns_404() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .return_once(|old_name, _| Err(ItemsServiceError::NotFound(old_name)));

        let mut res = TestClient::put("http://example.com/items/ghost")
            .json(&json!({ "name": "ghost", "cost": 1, "profit": 1 }))
            .send(&make_service(items))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "item \"ghost\" not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_name_collision_returns_409() {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .return_once(|_, item| Err(ItemsServiceError::AlreadyExists(item.name)));

        let res = TestClient::put("http://example.com/items/a")
            .json(&json!({ "name": "b", "cost": 1, "profit": 1 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
