pub mod rebalance_model;
pub mod rebalance_planner;

pub use rebalance_model::*;
pub use rebalance_planner::*;
