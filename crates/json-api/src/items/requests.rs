//! Item request and response bodies.

use allot::prelude::Item;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ItemRequest {
    /// Unique item name
    pub name: String,

    /// Minimum quantity
    #[serde(default)]
    pub lower_bound: u64,

    /// Maximum quantity, unbounded when absent
    #[serde(default)]
    pub upper_bound: Option<u64>,

    /// Cost per unit
    pub cost: f64,

    /// Profit per unit
    pub profit: f64,

    /// Pack size
    #[serde(default = "default_multiplier")]
    pub multiplier: u64,
}

fn default_multiplier() -> u64 {
    1
}

impl From<ItemRequest> for Item {
    fn from(request: ItemRequest) -> Self {
        Item::new(request.name, request.cost, request.profit)
            .with_bounds(request.lower_bound, request.upper_bound)
            .with_multiplier(request.multiplier)
    }
}

/// Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemResponse {
    pub name: String,
    pub lower_bound: u64,
    pub upper_bound: Option<u64>,
    pub cost: f64,
    pub profit: f64,
    pub multiplier: u64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        ItemResponse {
            name: item.name,
            lower_bound: item.lower_bound,
            upper_bound: item.upper_bound,
            cost: item.cost,
            profit: item.profit,
            multiplier: item.multiplier,
        }
    }
}

/// Errors raised while reading the item form.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum ItemFormError {
    #[error("Invalid input: {field} must be {expected}, got {value:?}")]
    InvalidNumber {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Item editor form
///
/// Blank bounds mean zero and unbounded; a blank multiplier means one. The
/// presence of `old_name` selects an update instead of an add.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemForm {
    pub name: String,

    #[serde(default)]
    pub lower_bound: String,

    #[serde(default)]
    pub upper_bound: String,

    pub cost: String,

    pub profit: String,

    #[serde(default)]
    pub multiplier: String,

    /// Name of the item being edited
    #[serde(default, rename = "old_name")]
    pub old_name: Option<String>,
}

impl ItemForm {
    /// Parse the numeric fields into an item.
    pub(crate) fn to_item(&self) -> Result<Item, ItemFormError> {
        let lower = parse_optional::<u64>("lowerBound", "a whole number", &self.lower_bound)?;
        let upper = parse_optional::<u64>("upperBound", "a whole number", &self.upper_bound)?;
        let multiplier =
            parse_optional::<u64>("multiplier", "a positive whole number", &self.multiplier)?;
        let cost = parse_required::<f64>("cost", "a number", &self.cost)?;
        let profit = parse_required::<f64>("profit", "a number", &self.profit)?;

        Ok(Item::new(self.name.clone(), cost, profit)
            .with_bounds(lower.unwrap_or(0), upper)
            .with_multiplier(multiplier.unwrap_or(1)))
    }
}

fn parse_optional<T: std::str::FromStr>(
    field: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<Option<T>, ItemFormError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    parse_required(field, expected, trimmed).map(Some)
}

fn parse_required<T: std::str::FromStr>(
    field: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, ItemFormError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_ignored| ItemFormError::InvalidNumber {
            field,
            expected,
            value: value.to_string(),
        })
}
