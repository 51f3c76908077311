#[cfg(feature = "cli")]
pub mod cli;
pub mod converter_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, ConvertRequest, GlobalOptions};
pub use converter_config::{ConverterConfig, PrecisionConfig, TemperatureDefaults, MAX_PRECISION};
