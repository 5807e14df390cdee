pub mod batch;
pub mod history;
pub mod holdings;
pub mod income;
pub mod portfolio_model;
pub mod portfolio_service;
pub mod portfolio_traits;
pub mod rebalance;
pub mod valuation;

pub use batch::*;
pub use history::*;
pub use holdings::*;
pub use income::*;
pub use portfolio_model::*;
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::*;
pub use rebalance::*;
pub use valuation::*;
