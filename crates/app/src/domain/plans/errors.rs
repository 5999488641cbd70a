//! Plans service errors.

use allot::prelude::{ModelError, SolverError};
use thiserror::Error;

/// Plans service errors
#[derive(Debug, Error)]
pub enum PlansServiceError {
    /// The stored items or budget do not form a valid model
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The solver found no optimum
    #[error(transparent)]
    Solver(#[from] SolverError),
}

impl PlansServiceError {
    /// Whether no purchase plan satisfies the bounds within the budget.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Solver(error) if error.is_infeasible())
    }

    /// Whether profit can grow without limit.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Solver(error) if error.is_unbounded())
    }
}
