use crate::domain::model::Domain;
use crate::utils::error::{ConvertError, Result};
use std::str::FromStr;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Mile,
}

impl DistanceUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Kilometer => METERS_PER_KILOMETER,
            DistanceUnit::Mile => METERS_PER_MILE,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "m" => Ok(DistanceUnit::Meter),
            "km" => Ok(DistanceUnit::Kilometer),
            "mi" => Ok(DistanceUnit::Mile),
            other => Err(ConvertError::UnsupportedUnit {
                unit: other.to_string(),
                domain: Domain::Distance,
            }),
        }
    }
}

/// Converts `value` between `m`, `km` and `mi` by way of meters. No rounding.
pub fn convert_distance(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: DistanceUnit = from.parse()?;
    let to: DistanceUnit = to.parse()?;

    if from == to {
        return Ok(value);
    }

    let meters = value * from.meters_per_unit();
    Ok(meters / to.meters_per_unit())
}
