//! Budget

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a budget.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BudgetError {
    /// The budget is negative.
    #[error("budget must be non-negative, got {0}")]
    Negative(f64),

    /// The budget is NaN or infinite.
    #[error("budget must be a finite number")]
    NonFinite,
}

/// Spending limit for a purchase plan.
///
/// Always finite and non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Budget(f64);

impl Budget {
    /// A budget of zero.
    pub const ZERO: Budget = Budget(0.0);

    /// Create a budget.
    ///
    /// # Errors
    ///
    /// Returns a [`BudgetError`] if `amount` is negative or not finite.
    pub fn new(amount: f64) -> Result<Self, BudgetError> {
        if !amount.is_finite() {
            return Err(BudgetError::NonFinite);
        }

        if amount < 0.0 {
            return Err(BudgetError::Negative(amount));
        }

        Ok(Budget(amount))
    }

    /// The budget amount.
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = BudgetError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Budget::new(amount)
    }
}

impl From<Budget> for f64 {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
