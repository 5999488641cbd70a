//! Purchase Plans

use std::collections::BTreeMap;

use serde::Serialize;

/// Quantity chosen for a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// Item name
    pub name: String,

    /// Value of the item's decision variable (number of packs)
    pub quantity: u64,

    /// Effective units bought (`quantity × multiplier`)
    pub units: u64,

    /// Spend contributed by this item
    pub cost: f64,

    /// Profit contributed by this item
    pub profit: f64,
}

/// Optimal purchase plan.
///
/// Plans are produced per optimisation and never written back to the item
/// store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePlan {
    allocations: Vec<Allocation>,
    total_cost: f64,
    total_profit: f64,
}

impl PurchasePlan {
    /// Plan with no allocations and zero totals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a plan from allocations, summing their cost and profit.
    pub fn from_allocations(allocations: Vec<Allocation>) -> Self {
        let total_cost = allocations.iter().map(|a| a.cost).sum();
        let total_profit = allocations.iter().map(|a| a.profit).sum();

        PurchasePlan {
            allocations,
            total_cost,
            total_profit,
        }
    }

    /// Allocations in item order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Total spend of the plan.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Total profit of the plan.
    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    /// Whether the plan allocates nothing.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Chosen quantity for the named item.
    pub fn quantity(&self, name: &str) -> Option<u64> {
        self.allocations
            .iter()
            .find(|allocation| allocation.name == name)
            .map(|allocation| allocation.quantity)
    }

    /// Units bought per item name, with pack sizes applied.
    pub fn units(&self) -> BTreeMap<String, u64> {
        self.allocations
            .iter()
            .map(|allocation| (allocation.name.clone(), allocation.units))
            .collect()
    }

    /// Packs bought per item name.
    pub fn packs(&self) -> BTreeMap<String, u64> {
        self.allocations
            .iter()
            .map(|allocation| (allocation.name.clone(), allocation.quantity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(name: &str, quantity: u64, cost: f64, profit: f64) -> Allocation {
        Allocation {
            name: name.to_string(),
            quantity,
            units: quantity * 2,
            cost,
            profit,
        }
    }

    #[test]
    fn empty_plan_has_zero_totals() {
        let plan = PurchasePlan::empty();

        assert!(plan.is_empty());
        assert!(plan.total_cost().abs() <= f64::EPSILON);
        assert!(plan.total_profit().abs() <= f64::EPSILON);
        assert!(plan.units().is_empty());
        assert!(plan.packs().is_empty());
    }

    #[test]
    fn from_allocations_sums_totals() {
        let plan = PurchasePlan::from_allocations(vec![
            allocation("a", 2, 4.0, 6.0),
            allocation("b", 1, 3.5, 1.5),
        ]);

        assert!((plan.total_cost() - 7.5).abs() <= f64::EPSILON);
        assert!((plan.total_profit() - 7.5).abs() <= f64::EPSILON);
        assert_eq!(plan.quantity("a"), Some(2));
        assert_eq!(plan.quantity("missing"), None);
    }

    #[test]
    fn units_and_packs_are_keyed_by_name() {
        let plan = PurchasePlan::from_allocations(vec![
            allocation("b", 1, 1.0, 1.0),
            allocation("a", 3, 1.0, 1.0),
        ]);

        let units = plan.units();
        let packs = plan.packs();

        assert_eq!(units.get("a"), Some(&6));
        assert_eq!(units.get("b"), Some(&2));
        assert_eq!(packs.get("a"), Some(&3));
        assert_eq!(packs.get("b"), Some(&1));
    }
}
