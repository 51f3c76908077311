use crate::utils::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Distance,
    Weight,
    Temperature,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Distance, Domain::Weight, Domain::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Distance => "distance",
            Domain::Weight => "weight",
            Domain::Temperature => "temperature",
        }
    }

    /// Reference unit every conversion in this domain passes through.
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            Domain::Distance => "m",
            Domain::Weight => "g",
            Domain::Temperature => "C",
        }
    }

    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Domain::Distance => &["m", "km", "mi"],
            Domain::Weight => &["g", "oz", "lb"],
            Domain::Temperature => &["C", "F", "K"],
        }
    }

    pub fn owns(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownType {
                name: s.to_string(),
            })
    }
}

/// Returns the domain that owns `unit`, or `None` for unrecognized codes.
pub fn type_from_unit(unit: &str) -> Option<Domain> {
    Domain::ALL.into_iter().find(|domain| domain.owns(unit))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    #[serde(rename = "type")]
    pub domain: Domain,
    pub input: Measurement,
    pub output: Measurement,
}

/// Which side of a comparison holds the larger canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Larger {
    First,
    Second,
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub value1: f64,
    pub value2: f64,
    pub unit: &'static str,
    pub difference: f64,
    pub larger: Larger,
}
