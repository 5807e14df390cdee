use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated totals across all holdings, cash included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_value: Decimal,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
}

impl PortfolioTotals {
    pub fn zero() -> Self {
        PortfolioTotals {
            total_value: Decimal::ZERO,
            total_return: Decimal::ZERO,
            total_return_percent: Decimal::ZERO,
        }
    }
}

/// Invested/uninvested split derived from the portfolio budget.
///
/// `available_cash` is allowed to be negative: holdings can appreciate past
/// the budget, and that overshoot is a signal the caller wants to see.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashPosition {
    pub total_invested: Decimal,
    pub available_cash: Decimal,
    pub cash_allocation_percent: Decimal,
}
