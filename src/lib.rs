pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, Command, ConvertRequest, GlobalOptions};
pub use crate::config::{ConverterConfig, PrecisionConfig, TemperatureDefaults};
pub use crate::core::{compare::Comparator, engine::ConversionEngine};
pub use crate::domain::model::{
    type_from_unit, ComparisonResult, ConversionReport, Domain, Larger, Measurement,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{ConvertError, Result};
