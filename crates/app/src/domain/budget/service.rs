//! Budget service.

use allot::prelude::Budget;
use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{domain::budget::errors::BudgetServiceError, store::Store};

/// Budget held in the shared store.
#[derive(Debug, Clone)]
pub struct MemoryBudgetService {
    store: Store,
}

impl MemoryBudgetService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BudgetService for MemoryBudgetService {
    async fn get_budget(&self) -> Result<Budget, BudgetServiceError> {
        Ok(self.store.read().await.budget)
    }

    async fn set_budget(&self, amount: f64) -> Result<Budget, BudgetServiceError> {
        let budget = Budget::new(amount)?;

        self.store.write().await.budget = budget;

        debug!(%budget, "set budget");

        Ok(budget)
    }
}

#[automock]
#[async_trait]
pub trait BudgetService: Send + Sync {
    /// Retrieves the current budget.
    async fn get_budget(&self) -> Result<Budget, BudgetServiceError>;

    /// Replaces the budget, rejecting negative or non-finite amounts.
    async fn set_budget(&self, amount: f64) -> Result<Budget, BudgetServiceError>;
}

#[cfg(test)]
mod tests {
    use allot::prelude::BudgetError;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn budget_defaults_to_zero() -> TestResult {
        let ctx = TestContext::new();

        assert_eq!(ctx.budget.get_budget().await?, Budget::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn set_budget_is_visible_to_later_reads() -> TestResult {
        let ctx = TestContext::new();

        ctx.budget.set_budget(42.5).await?;

        assert_eq!(ctx.budget.get_budget().await?.amount(), 42.5);

        Ok(())
    }

    #[tokio::test]
    async fn set_budget_rejects_negative_amount() -> TestResult {
        let ctx = TestContext::new();

        ctx.budget.set_budget(10.0).await?;

        let result = ctx.budget.set_budget(-1.0).await;

        assert!(
            matches!(
                result,
                Err(BudgetServiceError::InvalidBudget(BudgetError::Negative(_)))
            ),
            "expected InvalidBudget, got {result:?}"
        );
        assert_eq!(ctx.budget.get_budget().await?.amount(), 10.0);

        Ok(())
    }

    #[tokio::test]
    async fn set_budget_rejects_nan() {
        let ctx = TestContext::new();

        let result = ctx.budget.set_budget(f64::NAN).await;

        assert!(
            matches!(
                result,
                Err(BudgetServiceError::InvalidBudget(BudgetError::NonFinite))
            ),
            "expected InvalidBudget, got {result:?}"
        );
    }
}
