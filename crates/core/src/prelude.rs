//! Allot prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    budget::{Budget, BudgetError},
    items::{Item, ItemError},
    model::{ModelError, ModelTerm, PurchaseModel},
    persistence::{self, FormatError},
    plan::{Allocation, PurchasePlan},
    receipt::{Receipt, ReceiptError},
    solvers::{Solver, SolverError, ilp::ILPSolver},
};
