//! ILP Solver

use good_lp::{ResolutionError, Solution, SolverModel, Variable};
use num_traits::ToPrimitive;
use smallvec::SmallVec;

#[cfg(feature = "solver-highs")]
use good_lp::solvers::highs::highs as default_solver;
#[cfg(all(not(feature = "solver-highs"), feature = "solver-microlp"))]
use good_lp::solvers::microlp::microlp as default_solver;

use crate::{
    items::Item,
    model::{ModelTerm, PurchaseModel},
    plan::{Allocation, PurchasePlan},
    solvers::{Solver, SolverError},
};

/// Relative tolerance applied when comparing spend against the budget.
pub const BUDGET_TOLERANCE: f64 = 1e-9;

/// Solver using Integer Linear Programming (ILP)
#[derive(Debug)]
pub struct ILPSolver;

impl Solver for ILPSolver {
    fn solve(model: PurchaseModel<'_>) -> Result<PurchasePlan, SolverError> {
        // Nothing to decide: the plan is trivially empty.
        if model.is_empty() {
            return Ok(PurchasePlan::empty());
        }

        // Refuse models whose objective has no finite optimum before handing
        // them to the solver.
        if let Some(item) = model.unbounded_item() {
            return Err(SolverError::Unbounded {
                item: Some(item.name.clone()),
            });
        }

        let budget = model.budget().amount();
        let minimum_spend = model.minimum_spend();

        if exceeds_budget(minimum_spend, budget) {
            return Err(SolverError::LowerBoundsExceedBudget {
                minimum_spend,
                budget,
            });
        }

        let items = model.items();
        let terms: SmallVec<[ModelTerm; 16]> = model.terms().into();

        let (pb, profit, spend, quantities) = model.into_parts();

        ensure_quantity_vars_len(quantities.len(), items.len())?;

        let solution = pb
            .maximise(profit)
            .using(default_solver)
            .with(spend.leq(budget))
            .solve()
            .map_err(from_resolution_error)?;

        let allocations = extract_allocations(&solution, items, &terms, &quantities)?;

        let plan = PurchasePlan::from_allocations(allocations);

        if exceeds_budget(plan.total_cost(), budget) {
            return Err(SolverError::InvariantViolation {
                message: "solved plan exceeds the budget",
            });
        }

        Ok(plan)
    }
}

/// Whether `spend` is above `budget`, allowing for floating point noise.
fn exceeds_budget(spend: f64, budget: f64) -> bool {
    spend > budget + BUDGET_TOLERANCE * budget.abs().max(1.0)
}

/// Ensure that the number of quantity variables matches the number of items.
fn ensure_quantity_vars_len(vars_len: usize, items_len: usize) -> Result<(), SolverError> {
    if vars_len != items_len {
        return Err(SolverError::InvariantViolation {
            message: "quantity variable count does not match number of items",
        });
    }

    Ok(())
}

fn from_resolution_error(error: ResolutionError) -> SolverError {
    match error {
        ResolutionError::Infeasible => SolverError::Infeasible,
        ResolutionError::Unbounded => SolverError::Unbounded { item: None },
        other => SolverError::ResolutionError(other),
    }
}

/// Translate solver values back into per-item allocations.
///
/// # Errors
///
/// Returns a [`SolverError`] if a value falls outside its item's bounds or
/// cannot be represented as a quantity.
fn extract_allocations(
    solution: &impl Solution,
    items: &[Item],
    terms: &[ModelTerm],
    quantities: &[Variable],
) -> Result<Vec<Allocation>, SolverError> {
    items
        .iter()
        .zip(terms.iter())
        .zip(quantities.iter().copied())
        .map(|((item, term), var)| {
            // Integer variables come back as floats; snap to the nearest
            // integer to drop numerical noise.
            let value = solution.value(var).round();

            if value < term.lower || term.upper.is_some_and(|upper| value > upper) {
                return Err(SolverError::InvariantViolation {
                    message: "solved quantity lies outside the item bounds",
                });
            }

            let quantity = value
                .to_u64()
                .ok_or_else(|| SolverError::QuantityNotRepresentable {
                    name: item.name.clone(),
                    value,
                })?;

            let units = quantity.checked_mul(item.multiplier).ok_or_else(|| {
                SolverError::QuantityNotRepresentable {
                    name: item.name.clone(),
                    value,
                }
            })?;

            Ok(Allocation {
                name: item.name.clone(),
                quantity,
                units,
                cost: term.unit_cost * value,
                profit: term.unit_profit * value,
            })
        })
        .collect()
}
