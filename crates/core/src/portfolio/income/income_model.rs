use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dividend totals for a reporting year.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendSummary {
    pub total_amount: Decimal,
    pub year_to_date: Decimal,
    pub average_yield: Decimal,
}

impl DividendSummary {
    pub fn zero() -> Self {
        DividendSummary {
            total_amount: Decimal::ZERO,
            year_to_date: Decimal::ZERO,
            average_yield: Decimal::ZERO,
        }
    }
}
