//! Get Budget Handler

use salvo::prelude::*;

use crate::{budget::BudgetResponse, errors::ApiError, extensions::*};

/// Get Budget Handler
#[endpoint(tags("budget"), summary = "Get Budget")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BudgetResponse>, ApiError> {
    let state = depot.app_state()?;

    let budget = state
        .app
        .budget
        .get_budget()
        .await
        .or_500("failed to read budget")?;

    Ok(Json(BudgetResponse {
        budget: budget.amount(),
    }))
}
