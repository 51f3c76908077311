use crate::core::ConfigProvider;
use crate::domain::model::Domain;
use crate::domain::ports::DEFAULT_PRECISION;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_range, validate_unit_in_domain, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// Largest number of decimal places a result may be rounded to.
pub const MAX_PRECISION: u32 = 15;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub temperature: Option<TemperatureDefaults>,
    pub precision: Option<PrecisionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDefaults {
    #[serde(alias = "default_from")]
    pub default_from: Option<String>,
    #[serde(alias = "default_to")]
    pub default_to: Option<String>,
}

/// Decimal places, either one value for every domain or one per domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrecisionConfig {
    Global(u32),
    PerDomain(BTreeMap<Domain, u32>),
}

impl PrecisionConfig {
    pub fn resolve(&self, domain: Domain) -> u32 {
        match self {
            PrecisionConfig::Global(places) => *places,
            PrecisionConfig::PerDomain(places) => {
                places.get(&domain).copied().unwrap_or(DEFAULT_PRECISION)
            }
        }
    }
}

impl ConverterConfig {
    /// 內建預設值：溫度 C → F，精度未設定 (即 2 位小數)
    pub fn builtin() -> Self {
        Self {
            temperature: Some(TemperatureDefaults {
                default_from: Some("C".to_string()),
                default_to: Some("F".to_string()),
            }),
            precision: None,
        }
    }

    /// 從檔案載入配置 (`.json` 用 JSON 解析，其餘視為 TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        serde_json::from_str(&processed).map_err(|e| ConvertError::ConfigError {
            message: format!("JSON parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONVERT_PRECISION})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for ConverterConfig {
    fn precision_for(&self, domain: Domain) -> u32 {
        self.precision
            .as_ref()
            .map(|precision| precision.resolve(domain))
            .unwrap_or(DEFAULT_PRECISION)
    }

    fn default_temperature_from(&self) -> Option<&str> {
        self.temperature.as_ref()?.default_from.as_deref()
    }

    fn default_temperature_to(&self) -> Option<&str> {
        self.temperature.as_ref()?.default_to.as_deref()
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        if let Some(temperature) = &self.temperature {
            if let Some(unit) = &temperature.default_from {
                validate_unit_in_domain("temperature.defaultFrom", unit, Domain::Temperature)?;
            }
            if let Some(unit) = &temperature.default_to {
                validate_unit_in_domain("temperature.defaultTo", unit, Domain::Temperature)?;
            }
        }

        match &self.precision {
            Some(PrecisionConfig::Global(places)) => {
                validate_range("precision", *places, 0, MAX_PRECISION)?;
            }
            Some(PrecisionConfig::PerDomain(per_domain)) => {
                for (domain, places) in per_domain {
                    validate_range(&format!("precision.{}", domain), *places, 0, MAX_PRECISION)?;
                }
            }
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_per_domain_toml() {
        let toml_content = r#"
[temperature]
defaultFrom = "F"
defaultTo = "C"

[precision]
distance = 1
weight = 3
"#;

        let config = ConverterConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.default_temperature_from(), Some("F"));
        assert_eq!(config.default_temperature_to(), Some("C"));
        assert_eq!(config.precision_for(Domain::Distance), 1);
        assert_eq!(config.precision_for(Domain::Weight), 3);
        assert_eq!(config.precision_for(Domain::Temperature), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_global_precision_with_snake_case_keys() {
        let toml_content = r#"
precision = 4

[temperature]
default_from = "K"
"#;

        let config = ConverterConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.precision, Some(PrecisionConfig::Global(4)));
        assert_eq!(config.default_temperature_from(), Some("K"));
        assert_eq!(config.default_temperature_to(), None);
        for domain in Domain::ALL {
            assert_eq!(config.precision_for(domain), 4);
        }
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
  "temperature": { "defaultFrom": "C", "defaultTo": "F" },
  "precision": { "temperature": 1 }
}"#;

        let config = ConverterConfig::from_json_str(json).unwrap();
        assert_eq!(config, {
            let mut per_domain = BTreeMap::new();
            per_domain.insert(Domain::Temperature, 1);
            ConverterConfig {
                precision: Some(PrecisionConfig::PerDomain(per_domain)),
                ..ConverterConfig::builtin()
            }
        });
    }

    #[test]
    fn test_empty_config_defaults_to_two_places() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.precision_for(Domain::Weight), 2);
        assert_eq!(config.default_temperature_from(), None);
    }

    #[test]
    fn test_rejects_negative_precision_and_unknown_domain() {
        assert!(ConverterConfig::from_json_str(r#"{"precision": -1}"#).is_err());
        assert!(ConverterConfig::from_json_str(r#"{"precision": {"volume": 2}}"#).is_err());
        assert!(ConverterConfig::from_toml_str("precision = 1.5").is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = ConverterConfig::from_toml_str("precision = 40").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfigValue { ref field, .. } if field == "precision"));

        let config = ConverterConfig::from_toml_str("[temperature]\ndefaultTo = \"km\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConvertError::InvalidConfigValue { ref field, .. } if field == "temperature.defaultTo")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("UNIT_CONVERT_TEST_PRECISION", "5");

        let config = ConverterConfig::from_toml_str("precision = ${UNIT_CONVERT_TEST_PRECISION}").unwrap();
        assert_eq!(config.precision, Some(PrecisionConfig::Global(5)));

        std::env::remove_var("UNIT_CONVERT_TEST_PRECISION");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file
            .write_all(br#"{"precision": 3, "temperature": {"defaultFrom": "K", "defaultTo": "C"}}"#)
            .unwrap();

        let config = ConverterConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.precision_for(Domain::Distance), 3);
        assert_eq!(config.default_temperature_from(), Some("K"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConverterConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConvertError::IoError(_)));
    }
}
