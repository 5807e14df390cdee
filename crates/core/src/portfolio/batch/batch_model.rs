use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::portfolio_model::Portfolio;

/// One price and/or quantity correction aimed at a holding. Fields left
/// `None` keep their current value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuantityUpdate {
    pub holding_id: String,
    pub price: Option<Decimal>,
    pub quantity: Option<Decimal>,
}

/// Human-readable account of what a batch changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSummary {
    pub updated_count: usize,
    pub total_value_impact: Decimal,
}

/// New snapshot plus reporting produced by a batch reconciliation.
///
/// `warnings` carries the updates that could not be applied (unknown
/// holding ids); their presence does not invalidate the rest of the batch.
#[derive(Debug, Clone)]
pub struct BatchUpdateOutcome {
    pub portfolio: Portfolio,
    pub summary: BatchUpdateSummary,
    pub warnings: Vec<String>,
}
