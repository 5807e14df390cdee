pub mod batch_model;
pub mod batch_reconciler;

pub use batch_model::*;
pub use batch_reconciler::*;
