use rust_decimal::Decimal;

use crate::errors::{InvalidHoldingError, Result};
use crate::portfolio::holdings::{Holding, HoldingValuation};
use crate::utils::decimal_utils::{percent_of, round_percent};

/// Computes market value and unrealized gain for a single holding.
///
/// Gain figures require a known average cost; when it is missing they are
/// reported as `None` rather than estimated from the current price.
pub fn valuate(holding: &Holding) -> Result<HoldingValuation> {
    if holding.quantity < Decimal::ZERO {
        return Err(InvalidHoldingError::NegativeQuantity {
            ticker: holding.ticker.clone(),
            quantity: holding.quantity,
        }
        .into());
    }
    if holding.current_price < Decimal::ZERO {
        return Err(InvalidHoldingError::NegativePrice {
            ticker: holding.ticker.clone(),
            price: holding.current_price,
        }
        .into());
    }

    let total_value = holding.quantity * holding.current_price;

    let (unrealized_gain, unrealized_gain_percent) = match holding.cost_basis() {
        Some(cost_basis) => {
            let gain = total_value - cost_basis;
            (Some(gain), Some(round_percent(percent_of(gain, cost_basis))))
        }
        None => (None, None),
    };

    Ok(HoldingValuation {
        total_value,
        unrealized_gain,
        unrealized_gain_percent,
    })
}
