//! Create Item Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    items::{
        errors::into_api_error,
        requests::{ItemRequest, ItemResponse},
    },
};

/// Create Item Handler
#[endpoint(
    tags("items"),
    summary = "Add Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::CONFLICT, description = "An item with this name already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item"),
    ),
)]
#[tracing::instrument(
    name = "items.create",
    skip(json, depot, res),
    fields(item = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<ItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.app_state()?;
    let request = json.into_inner();

    tracing::Span::current().record("item", tracing::field::display(&request.name));

    let created = state
        .app
        .items
        .add_item(request.into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
