pub mod compare;
pub mod distance;
pub mod engine;
pub mod numeric;
pub mod temperature;
pub mod weight;

pub use crate::domain::model::{type_from_unit, ComparisonResult, Domain, Larger, Measurement};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
