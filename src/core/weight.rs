use crate::domain::model::Domain;
use crate::utils::error::{ConvertError, Result};
use std::str::FromStr;

pub const GRAMS_PER_OUNCE: f64 = 28.3495;
pub const GRAMS_PER_POUND: f64 = 453.592;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Gram,
    Ounce,
    Pound,
}

impl WeightUnit {
    fn grams_per_unit(self) -> f64 {
        match self {
            WeightUnit::Gram => 1.0,
            WeightUnit::Ounce => GRAMS_PER_OUNCE,
            WeightUnit::Pound => GRAMS_PER_POUND,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "g" => Ok(WeightUnit::Gram),
            "oz" => Ok(WeightUnit::Ounce),
            "lb" => Ok(WeightUnit::Pound),
            other => Err(ConvertError::UnsupportedUnit {
                unit: other.to_string(),
                domain: Domain::Weight,
            }),
        }
    }
}

/// Converts `value` between `g`, `oz` and `lb` by way of grams. No rounding.
pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: WeightUnit = from.parse()?;
    let to: WeightUnit = to.parse()?;

    if from == to {
        return Ok(value);
    }

    let grams = value * from.grams_per_unit();
    Ok(grams / to.grams_per_unit())
}
