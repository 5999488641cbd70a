//! Budget service errors.

use allot::prelude::BudgetError;
use thiserror::Error;

/// Budget service errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BudgetServiceError {
    /// Minimum spend or budget rejected
    #[error("invalid budget: {0}")]
    InvalidBudget(#[from] BudgetError),
}
