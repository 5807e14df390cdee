use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::limits::PortfolioConstraints;
use crate::portfolio::holdings::{Holding, HoldingSnapshotSummary};
use crate::portfolio::valuation::{aggregate, cash_position, holding_weight};

/// Portfolio style chosen at creation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PortfolioType {
    Equity,
    Debt,
    Hybrid,
    Index,
    Custom,
}

/// Aggregate root: configuration, holdings, and derived totals.
///
/// The derived fields (`total_value`, `total_return`, `total_return_percent`,
/// `available_cash`, `cash_allocation_percent`, per-holding `weight`) are
/// recomputed from the holdings on every mutation path. Stored copies exist
/// for display and querying only and are never treated as authoritative.
///
/// Engine operations take a snapshot and return a new one; concurrent
/// writers are expected to be fenced at the storage layer with an
/// `updated_at` (or version) check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub portfolio_type: PortfolioType,

    /// Total capital allocated to this portfolio.
    pub budget: Decimal,
    pub max_holdings: u32,
    pub max_allocation_percent: Decimal,

    /// Unique by id; insertion order, not significant to computation.
    pub holdings: Vec<Holding>,

    // Derived totals, see recompute_derived.
    pub total_value: Decimal,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
    pub available_cash: Decimal,
    pub cash_allocation_percent: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// The sizing rules configured on this portfolio.
    pub fn constraints(&self) -> PortfolioConstraints {
        PortfolioConstraints {
            budget: self.budget,
            max_holdings: self.max_holdings,
            max_allocation_percent: self.max_allocation_percent,
        }
    }

    pub fn holding(&self, holding_id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|holding| holding.id == holding_id)
    }

    /// The synthetic position representing uninvested capital, if present.
    /// At most one holding may carry the cash flag.
    pub fn cash_holding(&self) -> Option<&Holding> {
        self.holdings.iter().find(|holding| holding.is_cash)
    }

    /// Number of tradable (non-cash) positions.
    pub fn position_count(&self) -> usize {
        self.holdings.iter().filter(|holding| !holding.is_cash).count()
    }

    /// Recomputes every derived figure from the holdings: portfolio totals,
    /// the cash split, and each holding's value and weight. Cached values
    /// are overwritten unconditionally.
    pub fn recompute_derived(&mut self) -> Result<()> {
        let totals = aggregate(self)?;
        let cash = cash_position(self)?;

        self.total_value = totals.total_value;
        self.total_return = totals.total_return;
        self.total_return_percent = totals.total_return_percent;
        self.available_cash = cash.available_cash;
        self.cash_allocation_percent = cash.cash_allocation_percent;

        let total_value = self.total_value;
        for holding in &mut self.holdings {
            holding.total_value = holding.quantity * holding.current_price;
            holding.weight = holding_weight(holding.total_value, total_value);
        }

        Ok(())
    }

    /// Read-only rows for external consumers (comparison views, exports).
    pub fn holding_summaries(&self) -> Vec<HoldingSnapshotSummary> {
        self.holdings
            .iter()
            .map(|holding| HoldingSnapshotSummary {
                ticker: holding.ticker.clone(),
                name: holding.name.clone(),
                current_price: holding.current_price,
                total_value: holding.total_value,
                weight: holding.weight,
            })
            .collect()
    }
}

/// Input for creating a portfolio; the id, timestamps, and derived fields
/// are minted by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub portfolio_type: PortfolioType,
    pub budget: Decimal,
    pub max_holdings: u32,
    pub max_allocation_percent: Decimal,
}

/// Partial update to portfolio metadata and configuration. Fields left
/// `None` keep their current value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub portfolio_type: Option<PortfolioType>,
    pub budget: Option<Decimal>,
    pub max_holdings: Option<u32>,
    pub max_allocation_percent: Option<Decimal>,
}
