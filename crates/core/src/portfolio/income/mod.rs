pub mod income_analyzer;
pub mod income_model;

pub use income_analyzer::*;
pub use income_model::*;
