//! Core error types for the Foliotrack engine.
//!
//! This module defines storage-agnostic error types. Persistence-specific
//! errors are converted to these types by the storage layer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid holding: {0}")]
    InvalidHolding(#[from] InvalidHoldingError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(#[from] ConstraintViolationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// A holding whose raw inputs violate a stated invariant.
///
/// These are surfaced to the UI as-is and never silently corrected.
#[derive(Error, Debug)]
pub enum InvalidHoldingError {
    #[error("Holding {ticker} has a negative quantity ({quantity})")]
    NegativeQuantity { ticker: String, quantity: Decimal },

    #[error("Holding {ticker} has a negative price ({price})")]
    NegativePrice { ticker: String, price: Decimal },
}

/// A portfolio configuration or mutation that breaks a sizing rule.
#[derive(Error, Debug)]
pub enum ConstraintViolationError {
    #[error("Portfolio configuration is invalid: {0}")]
    InvalidConfiguration(String),

    #[error("Portfolio already holds {count} positions; the limit is {max}")]
    MaxHoldingsReached { count: usize, max: u32 },

    #[error("Allocation of {allocation}% for {ticker} exceeds the per-holding cap of {max}%")]
    AllocationCapExceeded {
        ticker: String,
        allocation: Decimal,
        max: Decimal,
    },

    #[error("Portfolio already has a cash holding ({ticker})")]
    DuplicateCashHolding { ticker: String },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
