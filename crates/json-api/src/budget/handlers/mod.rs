//! Budget Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

pub(crate) mod get;
pub(crate) mod update;

/// Budget Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BudgetResponse {
    /// Amount available to spend
    pub budget: f64,
}
