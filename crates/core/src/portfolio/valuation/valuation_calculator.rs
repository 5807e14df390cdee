use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::holdings::valuate;
use crate::portfolio::portfolio_model::Portfolio;
use crate::portfolio::valuation::{CashPosition, PortfolioTotals};
use crate::utils::decimal_utils::{percent_of, round_percent};

/// Sums holdings into portfolio-level totals. Cash holdings count toward
/// total value like any other position.
///
/// Return figures cover only holdings with a known cost basis; a portfolio
/// with no cost data reports a zero return rather than an estimated one.
pub fn aggregate(portfolio: &Portfolio) -> Result<PortfolioTotals> {
    let mut total_value = Decimal::ZERO;
    let mut total_return = Decimal::ZERO;
    let mut total_cost_basis = Decimal::ZERO;

    for holding in &portfolio.holdings {
        let valuation = valuate(holding)?;
        total_value += valuation.total_value;

        if let (Some(gain), Some(cost_basis)) = (valuation.unrealized_gain, holding.cost_basis()) {
            total_return += gain;
            total_cost_basis += cost_basis;
        }
    }

    debug!(
        "Aggregated {} holdings: total value {}",
        portfolio.holdings.len(),
        total_value
    );

    Ok(PortfolioTotals {
        total_value,
        total_return,
        total_return_percent: round_percent(percent_of(total_return, total_cost_basis)),
    })
}

/// Weight of a single holding within the portfolio, in percent. Zero when
/// the portfolio has no value.
pub fn holding_weight(holding_value: Decimal, total_value: Decimal) -> Decimal {
    round_percent(percent_of(holding_value, total_value))
}

/// Derives the invested amount, available cash, and cash allocation from
/// the budget.
///
/// Only non-cash holdings count as invested; the cash holding's value is
/// informational and must not double-count against `available_cash`.
pub fn cash_position(portfolio: &Portfolio) -> Result<CashPosition> {
    let mut total_invested = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;

    for holding in &portfolio.holdings {
        let valuation = valuate(holding)?;
        total_value += valuation.total_value;
        if !holding.is_cash {
            total_invested += valuation.total_value;
        }
    }

    let available_cash = portfolio.budget - total_invested;

    Ok(CashPosition {
        total_invested,
        available_cash,
        cash_allocation_percent: round_percent(percent_of(available_cash, total_value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::portfolio_model::test_fixtures::{portfolio_with, test_holding};
    use rust_decimal_macros::dec;

    #[test]
    fn test_aggregate_two_holdings() {
        let portfolio = portfolio_with(vec![
            test_holding("ACME", dec!(10), dec!(100)),
            test_holding("GLOBX", dec!(5), dec!(200)),
        ]);

        let totals = aggregate(&portfolio).unwrap();
        assert_eq!(totals.total_value, dec!(2000));

        assert_eq!(holding_weight(dec!(1000), totals.total_value), dec!(50));
    }

    #[test]
    fn test_aggregate_without_cost_basis_reports_zero_return() {
        let portfolio = portfolio_with(vec![test_holding("ACME", dec!(10), dec!(100))]);

        let totals = aggregate(&portfolio).unwrap();
        assert_eq!(totals.total_return, Decimal::ZERO);
        assert_eq!(totals.total_return_percent, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_return_covers_only_costed_holdings() {
        let mut costed = test_holding("ACME", dec!(10), dec!(110));
        costed.average_cost = Some(dec!(100));
        let uncosted = test_holding("GLOBX", dec!(5), dec!(200));

        let portfolio = portfolio_with(vec![costed, uncosted]);
        let totals = aggregate(&portfolio).unwrap();

        assert_eq!(totals.total_return, dec!(100));
        assert_eq!(totals.total_return_percent, dec!(10));
    }

    #[test]
    fn test_aggregate_empty_portfolio() {
        let portfolio = portfolio_with(Vec::new());
        let totals = aggregate(&portfolio).unwrap();
        assert_eq!(totals.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_holding_weight_zero_total_is_zero_not_nan() {
        assert_eq!(holding_weight(dec!(100), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_cash_position_derives_available_cash() {
        let mut portfolio = portfolio_with(vec![test_holding("ACME", dec!(10), dec!(100))]);
        portfolio.budget = dec!(1500);

        let cash = cash_position(&portfolio).unwrap();
        assert_eq!(cash.total_invested, dec!(1000));
        assert_eq!(cash.available_cash, dec!(500));
        assert_eq!(cash.cash_allocation_percent, dec!(50));
    }

    #[test]
    fn test_cash_position_can_go_negative() {
        let mut portfolio = portfolio_with(vec![test_holding("ACME", dec!(10), dec!(200))]);
        portfolio.budget = dec!(1500);

        let cash = cash_position(&portfolio).unwrap();
        assert_eq!(cash.available_cash, dec!(-500));
    }

    #[test]
    fn test_cash_holding_counts_toward_value_but_not_invested() {
        let mut cash_holding = test_holding("CASH", dec!(500), dec!(1));
        cash_holding.is_cash = true;

        let mut portfolio = portfolio_with(vec![
            test_holding("ACME", dec!(10), dec!(100)),
            cash_holding,
        ]);
        portfolio.budget = dec!(1500);

        let cash = cash_position(&portfolio).unwrap();
        assert_eq!(cash.total_invested, dec!(1000));
        assert_eq!(cash.available_cash, dec!(500));

        let totals = aggregate(&portfolio).unwrap();
        assert_eq!(totals.total_value, dec!(1500));
    }
}
