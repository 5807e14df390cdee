use chrono::Datelike;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::portfolio::holdings::DividendEntry;
use crate::portfolio::income::DividendSummary;
use crate::portfolio::portfolio_model::Portfolio;
use crate::utils::decimal_utils::{percent_of, round_percent};

/// Annualized yield of a single dividend declaration against the holding's
/// market value, in percent. Zero when the holding has no value.
pub fn dividend_yield(dividend: &DividendEntry, holding_value: Decimal) -> Decimal {
    let annual_dividend = dividend.amount * dividend.frequency.annual_multiplier();
    round_percent(percent_of(annual_dividend, holding_value))
}

/// Summarizes dividends across the portfolio for a reporting year.
///
/// `year_to_date` counts entries whose ex-date falls in `year`.
/// `average_yield` is the plain mean of each dividend-paying holding's
/// annualized yield, not a value-weighted figure. A holding's yield is
/// taken from its most recent declaration by ex-date.
pub fn dividend_summary(portfolio: &Portfolio, year: i32) -> DividendSummary {
    let mut total_amount = Decimal::zero();
    let mut year_to_date = Decimal::zero();
    let mut yields: Vec<Decimal> = Vec::new();

    for holding in &portfolio.holdings {
        for dividend in &holding.dividends {
            total_amount += dividend.amount;
            if dividend.ex_date.year() == year {
                year_to_date += dividend.amount;
            }
        }

        if let Some(latest) = holding.latest_dividend() {
            yields.push(dividend_yield(latest, holding.market_value()));
        }
    }

    if yields.is_empty() {
        debug!("No dividend-paying holdings; summary is zero");
        return DividendSummary {
            total_amount,
            year_to_date,
            average_yield: Decimal::zero(),
        };
    }

    let average_yield =
        round_percent(yields.iter().copied().sum::<Decimal>() / Decimal::new(yields.len() as i64, 0));

    DividendSummary {
        total_amount,
        year_to_date,
        average_yield,
    }
}
