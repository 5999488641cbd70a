//! Plans service.

use std::time::Instant;

use allot::prelude::{Budget, ILPSolver, PurchaseModel, PurchasePlan, Solver};
use async_trait::async_trait;
use humanize_duration::{Truncate, prelude::DurationExt};
use mockall::automock;
use tracing::{debug, info, warn};

use crate::{
    domain::plans::errors::PlansServiceError,
    store::{Snapshot, Store},
};

/// An optimal plan and the budget it was solved against.
#[derive(Debug, Clone)]
pub struct SolvedPlan {
    /// Packs and units bought per item
    pub plan: PurchasePlan,

    /// Budget in the snapshot that was solved
    pub budget: Budget,
}

/// Solves plans over the shared store.
#[derive(Debug, Clone)]
pub struct MemoryPlansService {
    store: Store,
}

impl MemoryPlansService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlansService for MemoryPlansService {
    async fn optimise_plan(&self) -> Result<SolvedPlan, PlansServiceError> {
        let Snapshot { items, budget } = self.store.snapshot().await;

        let start = Instant::now();

        let model = PurchaseModel::build(&items, budget)
            .inspect_err(|error| warn!(%error, "failed to build purchase model"))?;

        debug!(items = model.len(), %budget, formulation = %model, "built purchase model");

        let plan = ILPSolver::solve(model).inspect_err(|error| warn!(%error, "solve failed"))?;

        let elapsed = start.elapsed();

        info!(
            items = items.len(),
            %budget,
            total_cost = plan.total_cost(),
            total_profit = plan.total_profit(),
            elapsed = %elapsed.human(Truncate::Micro),
            "solved purchase plan"
        );

        Ok(SolvedPlan { plan, budget })
    }
}

/// Purchase plan optimisation.
#[automock]
#[async_trait]
pub trait PlansService: Send + Sync {
    /// Solves for the most profitable plan over a snapshot of the store.
    async fn optimise_plan(&self) -> Result<SolvedPlan, PlansServiceError>;
}
