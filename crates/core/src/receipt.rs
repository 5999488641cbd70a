//! Receipt
//!
//! Tabular rendering of a purchase plan for terminal output.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{budget::Budget, plan::PurchasePlan};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    IO(#[from] io::Error),
}

/// A purchase plan alongside the budget it was solved for.
#[derive(Debug)]
pub struct Receipt<'a> {
    plan: &'a PurchasePlan,
    budget: Budget,
}

impl<'a> Receipt<'a> {
    /// Create a receipt for the plan.
    pub fn new(plan: &'a PurchasePlan, budget: Budget) -> Self {
        Receipt { plan, budget }
    }

    /// Budget left over after the plan's spend.
    pub fn remaining_budget(&self) -> f64 {
        (self.budget.amount() - self.plan.total_cost()).max(0.0)
    }

    /// Write the receipt table followed by the totals summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Quantity", "Units", "Cost", "Profit"]);

        for allocation in self.plan.allocations() {
            builder.push_record([
                allocation.name.clone(),
                allocation.quantity.to_string(),
                allocation.units.to_string(),
                format!("{:.2}", allocation.cost),
                format!("{:.2}", allocation.profit),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "\n{table}")?;

        let lines = [
            ("Total cost:", format!("{:.2}", self.plan.total_cost())),
            ("Budget:", format!("{:.2}", self.budget.amount())),
            ("Remaining:", format!("{:.2}", self.remaining_budget())),
            ("Total profit:", format!("{:.2}", self.plan.total_profit())),
        ];

        let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in &lines {
            writeln!(out, " {label:<label_width$} {value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::plan::Allocation;

    use super::*;

    fn plan() -> PurchasePlan {
        PurchasePlan::from_allocations(vec![
            Allocation {
                name: "widget".to_string(),
                quantity: 2,
                units: 6,
                cost: 6.0,
                profit: 12.0,
            },
            Allocation {
                name: "gadget".to_string(),
                quantity: 0,
                units: 0,
                cost: 0.0,
                profit: 0.0,
            },
        ])
    }

    #[test]
    fn write_to_renders_allocations_and_totals() -> TestResult {
        let plan = plan();
        let receipt = Receipt::new(&plan, Budget::new(10.0)?);

        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("widget"));
        assert!(rendered.contains("gadget"));
        assert!(rendered.contains("12.00"));
        assert!(rendered.contains("Total cost:"));
        assert!(rendered.contains("Remaining:"));
        assert!(rendered.contains("4.00"));

        Ok(())
    }

    #[test]
    fn remaining_budget_never_negative() -> TestResult {
        let plan = plan();
        let receipt = Receipt::new(&plan, Budget::new(5.0)?);

        assert!(receipt.remaining_budget().abs() <= f64::EPSILON);

        Ok(())
    }
}
