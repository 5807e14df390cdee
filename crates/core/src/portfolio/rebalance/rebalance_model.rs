use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a suggested trade. `Hold` never appears in planner output
/// (holdings inside the drift threshold are simply not emitted); it exists
/// for callers that materialize a full per-holding table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RebalanceAction {
    Buy,
    Sell,
    Hold,
}

/// One suggested trade closing the gap between current and target weight.
/// Not persisted; recomputed on demand from the portfolio snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRecommendation {
    pub holding_id: String,
    pub ticker: String,
    pub current_weight: Decimal,
    pub target_weight: Decimal,
    pub drift: Decimal,
    pub action: RebalanceAction,
    pub recommended_quantity_delta: i64,
    pub estimated_cost: Decimal,
}
