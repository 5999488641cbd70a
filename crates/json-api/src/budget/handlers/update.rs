//! Update Budget Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    budget::{BudgetResponse, errors::into_api_error},
    errors::ApiError,
    extensions::*,
};

/// Update Budget Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBudgetRequest {
    /// New budget; must be finite and non-negative
    pub budget: f64,
}

/// Update Budget Handler
#[endpoint(
    tags("budget"),
    summary = "Set Budget",
    responses(
        (status_code = StatusCode::OK, description = "Budget updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid budget"),
    ),
)]
#[tracing::instrument(name = "budget.update", skip(json, depot), err(Debug))]
pub(crate) async fn handler(
    json: JsonBody<UpdateBudgetRequest>,
    depot: &mut Depot,
) -> Result<Json<BudgetResponse>, ApiError> {
    let state = depot.app_state()?;

    let budget = state
        .app
        .budget
        .set_budget(json.into_inner().budget)
        .await
        .map_err(into_api_error)?;

    tracing::info!(%budget, "updated budget");

    Ok(Json(BudgetResponse {
        budget: budget.amount(),
    }))
}
