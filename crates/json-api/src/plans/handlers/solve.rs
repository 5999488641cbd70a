//! Solve Handler

use std::collections::BTreeMap;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    observability::{SolveOutcome, observe_solve},
    plans::errors::into_api_error,
};

/// Solve Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SolveResponse {
    /// Objective value of the optimal plan
    pub profit: f64,

    /// Spend of the optimal plan
    pub total_cost: f64,

    /// Budget the plan was solved against
    pub budget: f64,

    /// Units bought per item name, pack sizes applied
    pub allocations: BTreeMap<String, u64>,

    /// Packs bought per item name
    pub packs: BTreeMap<String, u64>,
}

/// Solve Handler
///
/// Finds the most profitable quantities for the current items within the
/// current budget. The store is left unchanged.
#[endpoint(
    tags("plans"),
    summary = "Optimise Purchase Plan",
    responses(
        (status_code = StatusCode::OK, description = "Optimal plan"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Infeasible or unbounded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Items cannot be modelled"),
    ),
)]
#[tracing::instrument(name = "plans.solve", skip(depot), err(Debug))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SolveResponse>, ApiError> {
    let state = depot.app_state()?;

    let solved = match state.app.plans.optimise_plan().await {
        Ok(solved) => solved,
        Err(error) => {
            let (api_error, outcome) = into_api_error(&error);

            observe_solve(outcome);

            return Err(api_error);
        }
    };

    observe_solve(SolveOutcome::Optimal);

    Ok(Json(SolveResponse {
        profit: solved.plan.total_profit(),
        total_cost: solved.plan.total_cost(),
        budget: solved.budget.amount(),
        allocations: solved.plan.units(),
        packs: solved.plan.packs(),
    }))
}
