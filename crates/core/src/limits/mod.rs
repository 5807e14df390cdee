pub mod limits_model;
pub mod limits_validator;

pub use limits_model::*;
pub use limits_validator::*;
