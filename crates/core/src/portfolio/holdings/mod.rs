pub mod holdings_model;
pub mod holdings_valuator;

pub use holdings_model::*;
pub use holdings_valuator::*;
