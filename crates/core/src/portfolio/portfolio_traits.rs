use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::batch::{BatchUpdateOutcome, PriceQuantityUpdate};
use crate::portfolio::history::PriceHistoryStats;
use crate::portfolio::holdings::{DividendEntry, NewHolding};
use crate::portfolio::income::DividendSummary;
use crate::portfolio::portfolio_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::portfolio::rebalance::RebalanceRecommendation;
use crate::portfolio::valuation::{CashPosition, PortfolioTotals};

/// Storage collaborator boundary. The engine never performs I/O; a concrete
/// implementation (document store, SQL, in-memory) lives outside this crate
/// and is responsible for serialization and optimistic-concurrency checks.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn list_portfolios(&self, owner_id: &str) -> Result<Vec<Portfolio>>;
    async fn save_portfolio(&self, portfolio: &Portfolio) -> Result<()>;
    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;
}

/// The operations the UI issues against a portfolio. Mutating operations
/// return the freshly recomputed snapshot that was persisted.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;
    async fn update_portfolio(&self, portfolio_id: &str, update: PortfolioUpdate)
        -> Result<Portfolio>;
    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;

    async fn add_holding(&self, portfolio_id: &str, new_holding: NewHolding) -> Result<Portfolio>;
    async fn remove_holding(&self, portfolio_id: &str, holding_id: &str) -> Result<Portfolio>;
    async fn record_dividend(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        dividend: DividendEntry,
    ) -> Result<Portfolio>;
    async fn apply_batch_updates(
        &self,
        portfolio_id: &str,
        updates: Vec<PriceQuantityUpdate>,
        notes: Option<String>,
    ) -> Result<BatchUpdateOutcome>;

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn list_portfolios(&self, owner_id: &str) -> Result<Vec<Portfolio>>;
    fn portfolio_totals(&self, portfolio_id: &str) -> Result<PortfolioTotals>;
    fn cash_position(&self, portfolio_id: &str) -> Result<CashPosition>;
    fn rebalance_plan(
        &self,
        portfolio_id: &str,
        drift_threshold_percent: Option<Decimal>,
    ) -> Result<Vec<RebalanceRecommendation>>;
    fn dividend_summary(&self, portfolio_id: &str, year: i32) -> Result<DividendSummary>;
    fn price_history_stats(&self, portfolio_id: &str, holding_id: &str)
        -> Result<PriceHistoryStats>;
}
