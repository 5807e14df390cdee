use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payout schedule attached to a dividend declaration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DividendFrequency {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    Special,
}

impl DividendFrequency {
    /// Number of payouts per year used to annualize a single dividend amount.
    /// Special (one-off) dividends are not recurring and count once.
    pub fn annual_multiplier(&self) -> Decimal {
        match self {
            DividendFrequency::Monthly => dec!(12),
            DividendFrequency::Quarterly => dec!(4),
            DividendFrequency::SemiAnnual => dec!(2),
            DividendFrequency::Annual | DividendFrequency::Special => Decimal::ONE,
        }
    }
}

/// One recorded price observation for a holding. The log is append-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryEntry {
    pub price: Decimal,
    pub quantity: Decimal,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// One recorded dividend declaration for a holding. The log is append-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendEntry {
    pub amount: Decimal,
    pub ex_date: NaiveDate,
    pub pay_date: NaiveDate,
    pub frequency: DividendFrequency,
}

/// One position inside a portfolio, or the distinguished cash position.
///
/// `weight` and `total_value` are derived figures: they are recomputed from
/// `quantity` and `current_price` on every mutation and never trusted from
/// input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub quantity: Decimal,
    pub current_price: Decimal,

    /// Average acquisition cost per unit. Absent when the position was
    /// entered without cost data; gain figures stay `None` in that case
    /// rather than being estimated.
    pub average_cost: Option<Decimal>,

    /// Desired share of total portfolio value, in percent. When unset the
    /// holding is considered to be at its target.
    pub target_weight: Option<Decimal>,

    /// Share of total portfolio value, in percent. Derived.
    pub weight: Decimal,

    /// `quantity × current_price`. Derived.
    pub total_value: Decimal,

    pub price_history: Vec<PriceHistoryEntry>,
    pub dividends: Vec<DividendEntry>,

    /// Marks the synthetic position representing uninvested capital. A
    /// portfolio carries at most one of these.
    pub is_cash: bool,

    /// Qualitative commentary attached by external analysis tools (JSON).
    /// Stored alongside the position; never feeds into valuation math.
    #[serde(default)]
    pub insights: Option<Value>,
}

impl Holding {
    /// Market value recomputed from the raw inputs.
    pub fn market_value(&self) -> Decimal {
        self.quantity * self.current_price
    }

    /// Cost of the full position, when an average cost is known.
    pub fn cost_basis(&self) -> Option<Decimal> {
        self.average_cost.map(|cost| cost * self.quantity)
    }

    /// The most recently declared dividend, by ex-date.
    pub fn latest_dividend(&self) -> Option<&DividendEntry> {
        self.dividends.iter().max_by_key(|dividend| dividend.ex_date)
    }
}

/// Input for opening a position; the id and derived fields are minted by
/// the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub ticker: String,
    pub name: String,
    pub quantity: Decimal,
    pub current_price: Decimal,
    pub average_cost: Option<Decimal>,
    pub target_weight: Option<Decimal>,
    #[serde(default)]
    pub is_cash: bool,
}

/// Valuation figures for a single holding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub total_value: Decimal,
    pub unrealized_gain: Option<Decimal>,
    pub unrealized_gain_percent: Option<Decimal>,
}

/// Read-only row handed to external consumers (comparison views, exports).
/// Never feeds back into valuation math.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSnapshotSummary {
    pub ticker: String,
    pub name: String,
    pub current_price: Decimal,
    pub total_value: Decimal,
    pub weight: Decimal,
}
