//! Decimal helpers shared by the portfolio calculators.
//!
//! Every ratio in the engine goes through these guards so that a portfolio
//! with no value reports zeros instead of dividing by zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Divides `numerator` by `denominator`, returning zero when the
/// denominator is zero.
pub fn safe_divide(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Returns `part` as a percentage of `whole`, zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    safe_divide(part, whole) * dec!(100)
}

/// Rounds a percentage for reporting.
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Rounds a monetary amount for reporting.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Rounds to the nearest whole unit, half away from zero.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
