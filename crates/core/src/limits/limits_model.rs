use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ConstraintViolationError, Result};

/// Sizing rules a portfolio configuration must satisfy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConstraints {
    pub budget: Decimal,
    pub max_holdings: u32,
    pub max_allocation_percent: Decimal,
}

/// Outcome of validating a configuration.
///
/// Every rule violation is collected so the caller can present all problems
/// at once instead of fixing them one resubmission at a time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintValidation {
    pub errors: Vec<String>,
}

impl ConstraintValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the validation into a hard error for callers that must
    /// block a save on an invalid configuration.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConstraintViolationError::InvalidConfiguration(self.errors.join("; ")).into())
        }
    }
}
