//! Allot
//!
//! Allot builds budget-constrained purchase plans: given a set of items with
//! per-unit cost, profit, quantity bounds and pack multipliers, it finds the
//! integer quantities that maximise profit without exceeding a budget.

pub mod budget;
pub mod items;
pub mod model;
pub mod persistence;
pub mod plan;
pub mod prelude;
pub mod receipt;
pub mod solvers;
