use crate::domain::model::Domain;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid number provided: {input:?}")]
    InvalidNumber { input: String },

    #[error("Unsupported {domain} unit: {unit}")]
    UnsupportedUnit { unit: String, domain: Domain },

    #[error("Unknown type {name}")]
    UnknownType { name: String },

    #[error("Unknown unit: {unit}")]
    UnknownUnit { unit: String },

    #[error("Cannot compare {first_domain} ({first_unit}) with {second_domain} ({second_unit})")]
    UnitMismatch {
        first_unit: String,
        first_domain: Domain,
        second_unit: String,
        second_domain: Domain,
    },

    #[error("Missing {side} unit for {domain} conversion")]
    MissingUnit { domain: Domain, side: &'static str },

    #[error("Usage error: {message}")]
    Usage { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入錯誤 (數值、單位、類型)
    Input,
    /// 設定檔錯誤
    Configuration,
    /// 系統層錯誤 (檔案讀取等)
    System,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InvalidNumber { .. }
            | ConvertError::UnsupportedUnit { .. }
            | ConvertError::UnknownType { .. }
            | ConvertError::UnknownUnit { .. }
            | ConvertError::UnitMismatch { .. }
            | ConvertError::MissingUnit { .. }
            | ConvertError::Usage { .. } => ErrorCategory::Input,
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            ConvertError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InvalidNumber { input } => {
                format!("'{}' is not a valid number", input)
            }
            ConvertError::UnsupportedUnit { unit, domain } => {
                format!("'{}' is not a {} unit", unit, domain)
            }
            ConvertError::UnknownType { name } => format!("Unknown conversion type '{}'", name),
            ConvertError::UnknownUnit { unit } => format!("Unknown unit '{}'", unit),
            ConvertError::MissingUnit { domain, side } => {
                format!("No '{}' unit given for {} conversion", side, domain)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::InvalidNumber { .. } => {
                "Use a plain decimal number such as 42, -3.5 or 1.2e3 (no spaces)".to_string()
            }
            ConvertError::UnsupportedUnit { domain, .. } => {
                format!("Supported {} units: {}", domain, domain.units().join(", "))
            }
            ConvertError::UnknownType { .. } => {
                "Supported types: distance, weight, temperature".to_string()
            }
            ConvertError::UnknownUnit { .. } => {
                "Supported units: Distance: km, mi, m; Weight: g, oz, lb; Temperature: C, F, K"
                    .to_string()
            }
            ConvertError::UnitMismatch { .. } => {
                "Both measurements must belong to the same type".to_string()
            }
            ConvertError::MissingUnit { .. } => {
                "Pass both units explicitly, or set temperature.defaultFrom/defaultTo in the config file"
                    .to_string()
            }
            ConvertError::Usage { .. } => {
                "Run 'convert --help' for the accepted forms".to_string()
            }
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValue { .. } => {
                "Check the configuration file syntax and values".to_string()
            }
            ConvertError::IoError(_) => "Check that the file exists and is readable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
