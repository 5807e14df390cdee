use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Drift (in percent points) a holding must exceed before the rebalance
/// planner emits a recommendation for it
pub const DEFAULT_DRIFT_THRESHOLD_PERCENT: Decimal = dec!(2);
