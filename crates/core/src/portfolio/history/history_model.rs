use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Min/max bounds of a price window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Summary statistics over a holding's recorded price history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryStats {
    pub average_price: Decimal,
    pub price_range: PriceRange,
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
}

impl PriceHistoryStats {
    pub fn zero() -> Self {
        PriceHistoryStats {
            average_price: Decimal::ZERO,
            price_range: PriceRange {
                min: Decimal::ZERO,
                max: Decimal::ZERO,
            },
            price_change: Decimal::ZERO,
            price_change_percent: Decimal::ZERO,
        }
    }
}
