use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::DEFAULT_DRIFT_THRESHOLD_PERCENT;
use crate::errors::{ConstraintViolationError, Error, Result, ValidationError};
use crate::limits::validate;
use crate::portfolio::batch::{apply_batch, BatchUpdateOutcome, PriceQuantityUpdate};
use crate::portfolio::history::{analyze_price_history, PriceHistoryStats};
use crate::portfolio::holdings::{
    valuate, DividendEntry, Holding, NewHolding, PriceHistoryEntry,
};
use crate::portfolio::income::{dividend_summary, DividendSummary};
use crate::portfolio::portfolio_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::portfolio::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::portfolio::rebalance::{plan, RebalanceRecommendation};
use crate::portfolio::valuation::{aggregate, cash_position, CashPosition, PortfolioTotals};
use crate::utils::decimal_utils::{percent_of, round_percent};

/// UI-facing façade over the pure calculators.
///
/// This is the only layer that talks to storage, mints ids, and reads the
/// clock; everything below it is a deterministic function of its inputs.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        PortfolioService { repository }
    }

    async fn persist(&self, mut portfolio: Portfolio) -> Result<Portfolio> {
        portfolio.updated_at = Utc::now();
        self.repository.save_portfolio(&portfolio).await?;
        Ok(portfolio)
    }

    fn build_holding(&self, new_holding: NewHolding) -> Holding {
        Holding {
            id: Uuid::new_v4().to_string(),
            ticker: new_holding.ticker,
            name: new_holding.name,
            quantity: new_holding.quantity,
            current_price: new_holding.current_price,
            average_cost: new_holding.average_cost,
            target_weight: new_holding.target_weight,
            weight: Decimal::ZERO,
            total_value: Decimal::ZERO,
            price_history: Vec::new(),
            dividends: Vec::new(),
            is_cash: new_holding.is_cash,
            insights: None,
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        debug!(
            "Creating portfolio '{}' for owner {}",
            new_portfolio.name, new_portfolio.owner_id
        );

        let now = Utc::now();
        let mut portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            owner_id: new_portfolio.owner_id,
            name: new_portfolio.name,
            description: new_portfolio.description,
            portfolio_type: new_portfolio.portfolio_type,
            budget: new_portfolio.budget,
            max_holdings: new_portfolio.max_holdings,
            max_allocation_percent: new_portfolio.max_allocation_percent,
            holdings: Vec::new(),
            total_value: Decimal::ZERO,
            total_return: Decimal::ZERO,
            total_return_percent: Decimal::ZERO,
            available_cash: Decimal::ZERO,
            cash_allocation_percent: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };

        validate(&portfolio.constraints()).into_result()?;
        portfolio.recompute_derived()?;

        self.repository.save_portfolio(&portfolio).await?;
        Ok(portfolio)
    }

    async fn update_portfolio(
        &self,
        portfolio_id: &str,
        update: PortfolioUpdate,
    ) -> Result<Portfolio> {
        let mut portfolio = self.repository.get_portfolio(portfolio_id)?;

        if let Some(name) = update.name {
            portfolio.name = name;
        }
        if let Some(description) = update.description {
            portfolio.description = Some(description);
        }
        if let Some(portfolio_type) = update.portfolio_type {
            portfolio.portfolio_type = portfolio_type;
        }
        if let Some(budget) = update.budget {
            portfolio.budget = budget;
        }
        if let Some(max_holdings) = update.max_holdings {
            portfolio.max_holdings = max_holdings;
        }
        if let Some(max_allocation_percent) = update.max_allocation_percent {
            portfolio.max_allocation_percent = max_allocation_percent;
        }

        validate(&portfolio.constraints()).into_result()?;
        portfolio.recompute_derived()?;

        self.persist(portfolio).await
    }

    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()> {
        self.repository.delete_portfolio(portfolio_id).await
    }

    async fn add_holding(&self, portfolio_id: &str, new_holding: NewHolding) -> Result<Portfolio> {
        let mut portfolio = self.repository.get_portfolio(portfolio_id)?;
        let mut holding = self.build_holding(new_holding);

        // Validates quantity/price sign and prices the position.
        let valuation = valuate(&holding)?;

        if holding.is_cash {
            if let Some(existing) = portfolio.cash_holding() {
                return Err(ConstraintViolationError::DuplicateCashHolding {
                    ticker: existing.ticker.clone(),
                }
                .into());
            }
        } else {
            let count = portfolio.position_count();
            if count >= portfolio.max_holdings as usize {
                return Err(ConstraintViolationError::MaxHoldingsReached {
                    count,
                    max: portfolio.max_holdings,
                }
                .into());
            }

            let projected_total = aggregate(&portfolio)?.total_value + valuation.total_value;
            let projected_allocation =
                round_percent(percent_of(valuation.total_value, projected_total));
            if projected_allocation > portfolio.max_allocation_percent {
                return Err(ConstraintViolationError::AllocationCapExceeded {
                    ticker: holding.ticker.clone(),
                    allocation: projected_allocation,
                    max: portfolio.max_allocation_percent,
                }
                .into());
            }
        }

        if !holding.is_cash {
            holding.price_history.push(PriceHistoryEntry {
                price: holding.current_price,
                quantity: holding.quantity,
                date: Utc::now(),
                notes: None,
            });
        }

        portfolio.holdings.push(holding);
        portfolio.recompute_derived()?;

        self.persist(portfolio).await
    }

    async fn remove_holding(&self, portfolio_id: &str, holding_id: &str) -> Result<Portfolio> {
        let mut portfolio = self.repository.get_portfolio(portfolio_id)?;

        if portfolio.holding(holding_id).is_none() {
            return Err(Error::HoldingNotFound(holding_id.to_string()));
        }
        portfolio.holdings.retain(|holding| holding.id != holding_id);
        portfolio.recompute_derived()?;

        self.persist(portfolio).await
    }

    async fn record_dividend(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        dividend: DividendEntry,
    ) -> Result<Portfolio> {
        if dividend.amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "dividend amount must not be negative, got {}",
                dividend.amount
            ))
            .into());
        }

        let mut portfolio = self.repository.get_portfolio(portfolio_id)?;
        let holding = portfolio
            .holdings
            .iter_mut()
            .find(|holding| holding.id == holding_id)
            .ok_or_else(|| Error::HoldingNotFound(holding_id.to_string()))?;

        holding.dividends.push(dividend);

        self.persist(portfolio).await
    }

    async fn apply_batch_updates(
        &self,
        portfolio_id: &str,
        updates: Vec<PriceQuantityUpdate>,
        notes: Option<String>,
    ) -> Result<BatchUpdateOutcome> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        let outcome = apply_batch(&portfolio, &updates, notes.as_deref(), Utc::now())?;

        debug!(
            "Batch on portfolio {}: {} updated, value impact {}",
            portfolio_id, outcome.summary.updated_count, outcome.summary.total_value_impact
        );

        let BatchUpdateOutcome {
            portfolio: next,
            summary,
            warnings,
        } = outcome;
        let saved = self.persist(next).await?;

        Ok(BatchUpdateOutcome {
            portfolio: saved,
            summary,
            warnings,
        })
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.repository.get_portfolio(portfolio_id)
    }

    fn list_portfolios(&self, owner_id: &str) -> Result<Vec<Portfolio>> {
        self.repository.list_portfolios(owner_id)
    }

    fn portfolio_totals(&self, portfolio_id: &str) -> Result<PortfolioTotals> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        aggregate(&portfolio)
    }

    fn cash_position(&self, portfolio_id: &str) -> Result<CashPosition> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        cash_position(&portfolio)
    }

    fn rebalance_plan(
        &self,
        portfolio_id: &str,
        drift_threshold_percent: Option<Decimal>,
    ) -> Result<Vec<RebalanceRecommendation>> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        plan(
            &portfolio,
            drift_threshold_percent.unwrap_or(DEFAULT_DRIFT_THRESHOLD_PERCENT),
        )
    }

    fn dividend_summary(&self, portfolio_id: &str, year: i32) -> Result<DividendSummary> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        Ok(dividend_summary(&portfolio, year))
    }

    fn price_history_stats(
        &self,
        portfolio_id: &str,
        holding_id: &str,
    ) -> Result<PriceHistoryStats> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        let holding = portfolio
            .holding(holding_id)
            .ok_or_else(|| Error::HoldingNotFound(holding_id.to_string()))?;
        Ok(analyze_price_history(&holding.price_history))
    }
}
