use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{InvalidHoldingError, Result};
use crate::portfolio::batch::{BatchUpdateOutcome, BatchUpdateSummary, PriceQuantityUpdate};
use crate::portfolio::holdings::PriceHistoryEntry;
use crate::portfolio::portfolio_model::Portfolio;

/// Applies a set of price/quantity corrections to a portfolio snapshot and
/// returns a new snapshot with every derived figure recomputed from scratch.
///
/// Semantics are "apply what you can": updates naming a holding the
/// portfolio does not contain are collected as warnings and the rest of the
/// batch still applies. A negative price or quantity anywhere in the batch
/// is a validation error and rejects the whole batch before anything is
/// touched. The input snapshot is never mutated.
///
/// Each applied update appends one entry to the holding's price history;
/// the log is append-only and existing entries are never rewritten.
pub fn apply_batch(
    portfolio: &Portfolio,
    updates: &[PriceQuantityUpdate],
    notes: Option<&str>,
    as_of: DateTime<Utc>,
) -> Result<BatchUpdateOutcome> {
    validate_updates(portfolio, updates)?;

    let mut next = portfolio.clone();
    let mut warnings = Vec::new();
    let mut updated_count = 0;
    let mut total_value_impact = Decimal::ZERO;

    for update in updates {
        let Some(holding) = next
            .holdings
            .iter_mut()
            .find(|holding| holding.id == update.holding_id)
        else {
            let warning = format!("Holding {} not found; update skipped", update.holding_id);
            warn!("{}", warning);
            warnings.push(warning);
            continue;
        };

        let old_price = holding.current_price;
        let old_value = holding.quantity * holding.current_price;

        if let Some(price) = update.price {
            holding.current_price = price;
        }
        if let Some(quantity) = update.quantity {
            holding.quantity = quantity;
        }

        let new_value = holding.quantity * holding.current_price;
        let value_impact = new_value - old_value;
        total_value_impact += value_impact;
        updated_count += 1;

        debug!(
            "{}: price {} -> {} (delta {}), value impact {}",
            holding.ticker,
            old_price,
            holding.current_price,
            holding.current_price - old_price,
            value_impact
        );

        holding.price_history.push(PriceHistoryEntry {
            price: holding.current_price,
            quantity: holding.quantity,
            date: as_of,
            notes: notes.map(str::to_string),
        });
    }

    next.recompute_derived()?;

    Ok(BatchUpdateOutcome {
        portfolio: next,
        summary: BatchUpdateSummary {
            updated_count,
            total_value_impact,
        },
        warnings,
    })
}

/// Rejects a batch containing negative prices or quantities up front, so
/// validation errors are never partially applied.
fn validate_updates(portfolio: &Portfolio, updates: &[PriceQuantityUpdate]) -> Result<()> {
    for update in updates {
        let ticker = portfolio
            .holdings
            .iter()
            .find(|holding| holding.id == update.holding_id)
            .map(|holding| holding.ticker.clone())
            .unwrap_or_else(|| update.holding_id.clone());

        if let Some(price) = update.price {
            if price < Decimal::ZERO {
                return Err(InvalidHoldingError::NegativePrice { ticker, price }.into());
            }
        }
        if let Some(quantity) = update.quantity {
            if quantity < Decimal::ZERO {
                return Err(InvalidHoldingError::NegativeQuantity { ticker, quantity }.into());
            }
        }
    }
    Ok(())
}
