pub mod history_analyzer;
pub mod history_model;

pub use history_analyzer::*;
pub use history_model::*;
