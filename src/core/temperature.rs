use crate::domain::model::Domain;
use crate::utils::error::{ConvertError, Result};
use std::str::FromStr;

pub const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    fn celsius_into(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "C" => Ok(TemperatureUnit::Celsius),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            "K" => Ok(TemperatureUnit::Kelvin),
            other => Err(ConvertError::UnsupportedUnit {
                unit: other.to_string(),
                domain: Domain::Temperature,
            }),
        }
    }
}

/// Converts `value` between `C`, `F` and `K`.
///
/// The scales are affine rather than proportional, so the value is moved onto
/// Celsius first and then onto the target scale. No rounding.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: TemperatureUnit = from.parse()?;
    let to: TemperatureUnit = to.parse()?;

    if from == to {
        return Ok(value);
    }

    Ok(to.celsius_into(from.to_celsius(value)))
}
