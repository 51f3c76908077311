use crate::domain::model::Domain;
use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_unit_in_domain(field_name: &str, unit: &str, domain: Domain) -> Result<()> {
    if unit.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: unit.to_string(),
            reason: "Unit cannot be empty or whitespace-only".to_string(),
        });
    }

    if !domain.owns(unit) {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: unit.to_string(),
            reason: format!(
                "Not a {} unit. Valid units: {}",
                domain,
                domain.units().join(", ")
            ),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_in_domain() {
        assert!(validate_unit_in_domain("temperature.defaultFrom", "C", Domain::Temperature).is_ok());
        assert!(validate_unit_in_domain("temperature.defaultFrom", "K", Domain::Temperature).is_ok());
        assert!(validate_unit_in_domain("temperature.defaultFrom", "km", Domain::Temperature).is_err());
        assert!(validate_unit_in_domain("temperature.defaultFrom", " ", Domain::Temperature).is_err());
        assert!(validate_unit_in_domain("temperature.defaultFrom", "c", Domain::Temperature).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("precision", 0u32, 0, 15).is_ok());
        assert!(validate_range("precision", 15u32, 0, 15).is_ok());
        assert!(validate_range("precision", 16u32, 0, 15).is_err());
    }
}
