//! Purchase Model
//!
//! Translates a set of items and a budget into an integer linear program:
//!
//! ```text
//! maximise    Σ profit_i × multiplier_i × x_i
//! subject to  Σ cost_i × multiplier_i × x_i ≤ budget
//!             lower_i ≤ x_i ≤ upper_i,  x_i ∈ ℤ
//! ```

use std::fmt;

use good_lp::{Expression, ProblemVariables, Variable, variable};
use num_traits::ToPrimitive;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    budget::Budget,
    items::{Item, ItemError},
};

/// Errors raised while building a purchase model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// An item violates its invariants.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),

    /// Two items share a name.
    #[error("duplicate item name: {0}")]
    DuplicateName(String),

    /// An integer value cannot be represented exactly as a solver coefficient.
    #[error("value {value} of {name} cannot be represented exactly as a solver coefficient")]
    NotRepresentable {
        /// Item name
        name: String,

        /// Offending value
        value: u64,
    },

    /// Scaling a cost or profit by the multiplier overflowed.
    #[error("scaled cost or profit of {name} is not finite")]
    NonFiniteCoefficient {
        /// Item name
        name: String,
    },
}

/// Solver coefficients contributed by a single item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTerm {
    /// Spend per unit of the decision variable (`cost × multiplier`)
    pub unit_cost: f64,

    /// Profit per unit of the decision variable (`profit × multiplier`)
    pub unit_profit: f64,

    /// Lower bound of the decision variable
    pub lower: f64,

    /// Upper bound of the decision variable
    pub upper: Option<f64>,
}

impl ModelTerm {
    fn for_item(item: &Item) -> Result<Self, ModelError> {
        let exact = |value: u64| {
            u64_to_f64_exact(value).ok_or_else(|| ModelError::NotRepresentable {
                name: item.name.clone(),
                value,
            })
        };

        let multiplier = exact(item.multiplier)?;
        let lower = exact(item.lower_bound)?;
        let upper = item.upper_bound.map(exact).transpose()?;

        let unit_cost = item.cost * multiplier;
        let unit_profit = item.profit * multiplier;

        if !unit_cost.is_finite() || !unit_profit.is_finite() {
            return Err(ModelError::NonFiniteCoefficient {
                name: item.name.clone(),
            });
        }

        Ok(ModelTerm {
            unit_cost,
            unit_profit,
            lower,
            upper,
        })
    }

    /// Spend incurred by the lower bound alone.
    pub fn minimum_spend(&self) -> f64 {
        self.unit_cost * self.lower
    }
}

/// Integer linear program for a purchase plan.
pub struct PurchaseModel<'a> {
    items: &'a [Item],
    budget: Budget,
    pb: ProblemVariables,
    quantities: SmallVec<[Variable; 16]>,
    terms: SmallVec<[ModelTerm; 16]>,
    profit: Expression,
    spend: Expression,
}

impl fmt::Debug for PurchaseModel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurchaseModel")
            .field("budget", &self.budget)
            .field("pb", &"<ProblemVariables>")
            .field(
                "quantities",
                &format!("[{} variables]", self.quantities.len()),
            )
            .field("terms", &self.terms)
            .field("profit", &"<Expression>")
            .field("spend", &"<Expression>")
            .finish()
    }
}

impl<'a> PurchaseModel<'a> {
    /// Build the model for the given items and budget.
    ///
    /// One integer decision variable is created per item, in item order.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if any item is invalid, names are not unique,
    /// or a bound or multiplier cannot be used as an exact solver coefficient.
    pub fn build(items: &'a [Item], budget: Budget) -> Result<Self, ModelError> {
        ensure_unique_names(items)?;

        let mut pb = ProblemVariables::new();
        let mut quantities = SmallVec::with_capacity(items.len());
        let mut terms = SmallVec::with_capacity(items.len());
        let mut profit = Expression::default();
        let mut spend = Expression::default();

        for item in items {
            item.validate()?;

            let term = ModelTerm::for_item(item)?;

            let mut definition = variable().integer().min(term.lower);

            if let Some(upper) = term.upper {
                definition = definition.max(upper);
            }

            let quantity = pb.add(definition);

            profit += quantity * term.unit_profit;
            spend += quantity * term.unit_cost;

            quantities.push(quantity);
            terms.push(term);
        }

        Ok(PurchaseModel {
            items,
            budget,
            pb,
            quantities,
            terms,
            profit,
            spend,
        })
    }

    /// Items the model was built from.
    pub fn items(&self) -> &'a [Item] {
        self.items
    }

    /// Budget the model is constrained by.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Coefficients per item, in item order.
    pub fn terms(&self) -> &[ModelTerm] {
        &self.terms
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Whether the model has no decision variables.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Spend forced by the lower bounds of every item.
    pub fn minimum_spend(&self) -> f64 {
        self.terms.iter().map(ModelTerm::minimum_spend).sum()
    }

    /// First item whose quantity could grow forever while increasing profit.
    ///
    /// That is an item with no upper bound, no spend per unit and a positive
    /// profit per unit.
    pub fn unbounded_item(&self) -> Option<&'a Item> {
        self.items
            .iter()
            .zip(self.terms.iter())
            .find(|(_, term)| {
                term.upper.is_none() && term.unit_cost <= 0.0 && term.unit_profit > 0.0
            })
            .map(|(item, _)| item)
    }

    /// Extract the problem variables, profit objective, spend expression and
    /// decision variables.
    pub(crate) fn into_parts(
        self,
    ) -> (
        ProblemVariables,
        Expression,
        Expression,
        SmallVec<[Variable; 16]>,
    ) {
        (self.pb, self.profit, self.spend, self.quantities)
    }
}

/// Renders the formulation in an LP-like text form.
impl fmt::Display for PurchaseModel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "maximise")?;
        writeln!(f, "    {}", linear_sum(self.terms.iter().map(|t| t.unit_profit)))?;
        writeln!(f, "subject to")?;
        writeln!(
            f,
            "    budget: {} <= {}",
            linear_sum(self.terms.iter().map(|t| t.unit_cost)),
            self.budget
        )?;
        writeln!(f, "bounds")?;

        for (idx, (item, term)) in self.items.iter().zip(self.terms.iter()).enumerate() {
            match term.upper {
                Some(upper) => writeln!(
                    f,
                    "    {} <= x{idx} <= {upper}  # {}",
                    term.lower, item.name
                )?,
                None => writeln!(f, "    {} <= x{idx}  # {}", term.lower, item.name)?,
            }
        }

        Ok(())
    }
}

fn linear_sum(coefficients: impl Iterator<Item = f64>) -> String {
    let terms: Vec<String> = coefficients
        .enumerate()
        .map(|(idx, coefficient)| format!("{coefficient} x{idx}"))
        .collect();

    if terms.is_empty() {
        return "0".to_string();
    }

    terms.join(" + ")
}

fn ensure_unique_names(items: &[Item]) -> Result<(), ModelError> {
    let mut seen = FxHashSet::default();

    for item in items {
        if !seen.insert(item.name.as_str()) {
            return Err(ModelError::DuplicateName(item.name.clone()));
        }
    }

    Ok(())
}

/// Convert a `u64` to an `f64` if it can be represented exactly.
pub(crate) fn u64_to_f64_exact(v: u64) -> Option<f64> {
    let f = v.to_f64()?;

    (f.to_u64() == Some(v)).then_some(f)
}
