//! Items

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an item violates its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
    /// The item name is empty or only whitespace.
    #[error("item name must not be empty")]
    EmptyName,

    /// The upper bound is below the lower bound.
    #[error("upper bound {upper} of {name} must not be below lower bound {lower}")]
    UpperBelowLower {
        /// Item name
        name: String,

        /// Lower bound
        lower: u64,

        /// Upper bound
        upper: u64,
    },

    /// The cost is negative.
    #[error("cost of {name} must be non-negative, got {cost}")]
    NegativeCost {
        /// Item name
        name: String,

        /// Offending cost
        cost: f64,
    },

    /// The cost is NaN or infinite.
    #[error("cost of {name} must be a finite number")]
    NonFiniteCost {
        /// Item name
        name: String,
    },

    /// The profit is NaN or infinite.
    #[error("profit of {name} must be a finite number")]
    NonFiniteProfit {
        /// Item name
        name: String,
    },

    /// The multiplier is zero.
    #[error("multiplier of {name} must be positive")]
    ZeroMultiplier {
        /// Item name
        name: String,
    },
}

/// A purchasable item.
///
/// The decision variable for an item is the number of multiplier-sized packs
/// bought. Each pack contributes `cost × multiplier` to spend and
/// `profit × multiplier` to profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Item {
    /// Unique item name
    pub name: String,

    /// Minimum quantity purchased
    #[serde(default)]
    pub lower_bound: u64,

    /// Maximum quantity purchased, unbounded when `None`
    #[serde(default)]
    pub upper_bound: Option<u64>,

    /// Cost per unit
    pub cost: f64,

    /// Profit per unit
    pub profit: f64,

    /// Pack size applied to the purchased quantity
    #[serde(default = "default_multiplier")]
    pub multiplier: u64,
}

fn default_multiplier() -> u64 {
    1
}

impl Item {
    /// Create an unbounded item with a multiplier of one.
    pub fn new(name: impl Into<String>, cost: f64, profit: f64) -> Self {
        Item {
            name: name.into(),
            lower_bound: 0,
            upper_bound: None,
            cost,
            profit,
            multiplier: 1,
        }
    }

    /// Set the quantity bounds.
    #[must_use]
    pub fn with_bounds(mut self, lower: u64, upper: Option<u64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    /// Set the multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Check the item invariants.
    ///
    /// # Errors
    ///
    /// Returns an [`ItemError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }

        if let Some(upper) = self.upper_bound
            && upper < self.lower_bound
        {
            return Err(ItemError::UpperBelowLower {
                name: self.name.clone(),
                lower: self.lower_bound,
                upper,
            });
        }

        if !self.cost.is_finite() {
            return Err(ItemError::NonFiniteCost {
                name: self.name.clone(),
            });
        }

        if self.cost < 0.0 {
            return Err(ItemError::NegativeCost {
                name: self.name.clone(),
                cost: self.cost,
            });
        }

        if !self.profit.is_finite() {
            return Err(ItemError::NonFiniteProfit {
                name: self.name.clone(),
            });
        }

        if self.multiplier == 0 {
            return Err(ItemError::ZeroMultiplier {
                name: self.name.clone(),
            });
        }

        Ok(())
    }

    /// Whether the item has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}
