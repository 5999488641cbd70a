//! Solvers for Purchase Plans

use good_lp::ResolutionError;
use thiserror::Error;

use crate::{model::PurchaseModel, plan::PurchasePlan};

pub mod ilp;

/// Solver Errors
#[derive(Debug, Error)]
pub enum SolverError {
    /// The lower bounds alone cost more than the budget.
    #[error("lower bounds require a spend of {minimum_spend}, which exceeds the budget of {budget}")]
    LowerBoundsExceedBudget {
        /// Spend forced by the lower bounds
        minimum_spend: f64,

        /// Available budget
        budget: f64,
    },

    /// No assignment satisfies the bounds and the budget.
    #[error("no purchase plan satisfies the item bounds within the budget")]
    Infeasible,

    /// Profit can grow without limit.
    #[error("{}", unbounded_message(.item.as_deref()))]
    Unbounded {
        /// Item responsible, when known
        item: Option<String>,
    },

    /// A solved quantity does not fit the quantity type.
    #[error("solved quantity {value} of {name} is not representable")]
    QuantityNotRepresentable {
        /// Item name
        name: String,

        /// Solver value
        value: f64,
    },

    /// Wrapped solver resolution error
    #[error(transparent)]
    ResolutionError(#[from] ResolutionError),

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

impl SolverError {
    /// Whether no feasible plan exists.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            SolverError::Infeasible | SolverError::LowerBoundsExceedBudget { .. }
        )
    }

    /// Whether the plan's profit is unbounded.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, SolverError::Unbounded { .. })
    }
}

fn unbounded_message(item: Option<&str>) -> String {
    match item {
        Some(name) => format!(
            "profit is unbounded: {name} has no upper bound, no cost and a positive profit"
        ),
        None => "profit is unbounded".to_string(),
    }
}

/// Trait for solving purchase models
pub trait Solver {
    /// Solve the model, returning the profit-maximising plan.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the model is infeasible, unbounded, or the
    /// solver fails.
    fn solve(model: PurchaseModel<'_>) -> Result<PurchasePlan, SolverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_variants_are_flagged() {
        assert!(SolverError::Infeasible.is_infeasible());
        assert!(
            SolverError::LowerBoundsExceedBudget {
                minimum_spend: 50.0,
                budget: 40.0,
            }
            .is_infeasible()
        );
        assert!(!SolverError::Unbounded { item: None }.is_infeasible());
    }

    #[test]
    fn unbounded_message_names_item() {
        let error = SolverError::Unbounded {
            item: Some("free sample".to_string()),
        };

        assert!(error.is_unbounded());
        assert!(error.to_string().contains("free sample"));
    }
}
