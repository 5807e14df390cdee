use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::limits::{ConstraintValidation, PortfolioConstraints};

/// Validates a portfolio configuration.
///
/// Rules are checked independently and every violation is reported; nothing
/// short-circuits. The consistency rule ties the two limits together: a
/// per-holding cap of X% needs at least `ceil(100 / X)` holdings before the
/// portfolio can reach full allocation at all.
pub fn validate(constraints: &PortfolioConstraints) -> ConstraintValidation {
    let mut errors = Vec::new();

    if constraints.max_allocation_percent <= Decimal::ZERO
        || constraints.max_allocation_percent > dec!(100)
    {
        errors.push(format!(
            "maxAllocationPercent must be within (0, 100], got {}",
            constraints.max_allocation_percent
        ));
    }

    if constraints.max_holdings < 1 {
        errors.push("maxHoldings must be at least 1".to_string());
    }

    // The consistency rule needs a positive cap to be computable; when the
    // cap itself is out of range that violation is already reported above.
    if constraints.max_allocation_percent > Decimal::ZERO {
        let min_holdings = (dec!(100) / constraints.max_allocation_percent).ceil();
        if Decimal::from(constraints.max_holdings) < min_holdings {
            errors.push(format!(
                "maxHoldings {} cannot reach full allocation with a {}% per-holding cap; at least {} holdings are required",
                constraints.max_holdings, constraints.max_allocation_percent, min_holdings
            ));
        }
    }

    if constraints.budget <= Decimal::ZERO {
        errors.push(format!("budget must be positive, got {}", constraints.budget));
    }

    ConstraintValidation { errors }
}
