//! Item Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, items::requests::ItemResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemsResponse {
    /// Items in insertion order
    pub items: Vec<ItemResponse>,
}

/// Item Index Handler
///
/// Returns every item in insertion order.
#[endpoint(tags("items"), summary = "List Items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ItemsResponse>, ApiError> {
    let state = depot.app_state()?;

    let items = state
        .app
        .items
        .list_items()
        .await
        .or_500("failed to list items")?;

    Ok(Json(ItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
