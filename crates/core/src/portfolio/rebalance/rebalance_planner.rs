use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::portfolio::holdings::valuate;
use crate::portfolio::portfolio_model::Portfolio;
use crate::portfolio::rebalance::{RebalanceAction, RebalanceRecommendation};
use crate::portfolio::valuation::aggregate;
use crate::utils::decimal_utils::{percent_of, round_half_up, round_money, round_percent};

/// Builds buy/sell recommendations for holdings whose weight drifted past
/// `drift_threshold_percent`.
///
/// Holdings inside the threshold are not emitted: silence means "no action
/// needed". A holding without a target weight is treated as being at its
/// target. Recommendations whose rounded quantity comes out to zero are
/// suppressed as well, since they are not actionable.
///
/// The result is sorted by drift descending so the caller can surface the
/// largest misallocation first. The portfolio itself is never mutated;
/// applying a recommendation is a separate batch update.
pub fn plan(
    portfolio: &Portfolio,
    drift_threshold_percent: Decimal,
) -> Result<Vec<RebalanceRecommendation>> {
    let totals = aggregate(portfolio)?;
    if totals.total_value.is_zero() {
        return Ok(Vec::new());
    }

    let mut recommendations = Vec::new();

    for holding in &portfolio.holdings {
        let current_value = valuate(holding)?.total_value;
        let current_weight = percent_of(current_value, totals.total_value);
        let target_weight = holding.target_weight.unwrap_or(current_weight);
        let drift = (current_weight - target_weight).abs();

        if drift <= drift_threshold_percent {
            continue;
        }

        // No actionable quantity exists without a positive price.
        if holding.current_price <= Decimal::ZERO {
            debug!(
                "Skipping {}: drift {} but no positive price to trade against",
                holding.ticker, drift
            );
            continue;
        }

        let target_value = target_weight / dec!(100) * totals.total_value;
        let delta = target_value - current_value;
        let action = if delta > Decimal::ZERO {
            RebalanceAction::Buy
        } else {
            RebalanceAction::Sell
        };

        let quantity_delta = round_half_up(delta.abs() / holding.current_price)
            .to_i64()
            .unwrap_or(0);
        if quantity_delta == 0 {
            continue;
        }

        recommendations.push(RebalanceRecommendation {
            holding_id: holding.id.clone(),
            ticker: holding.ticker.clone(),
            current_weight: round_percent(current_weight),
            target_weight: round_percent(target_weight),
            drift: round_percent(drift),
            action,
            recommended_quantity_delta: quantity_delta,
            estimated_cost: round_money(delta.abs()),
        });
    }

    recommendations.sort_by(|a, b| b.drift.cmp(&a.drift));

    Ok(recommendations)
}
