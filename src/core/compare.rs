use crate::core::engine::{convert_unrounded, ConversionEngine};
use crate::core::numeric::{round_to, NumericInput};
use crate::core::ConfigProvider;
use crate::domain::model::{type_from_unit, ComparisonResult, Domain, Larger};
use crate::utils::error::{ConvertError, Result};

/// Normalizes two measurements of one domain onto its canonical unit.
pub struct Comparator<'a, C: ConfigProvider> {
    engine: &'a ConversionEngine<C>,
}

impl<'a, C: ConfigProvider> Comparator<'a, C> {
    pub fn new(engine: &'a ConversionEngine<C>) -> Self {
        Self { engine }
    }

    /// Compares `value1 unit1` against `value2 unit2` within `domain`.
    ///
    /// The reported canonical values go through the engine (and are therefore
    /// rounded) unless the unit already is canonical. The ordering flag and
    /// the difference are computed from the unrounded canonical values; only
    /// the difference is rounded afterwards.
    pub fn compare(
        &self,
        domain: Domain,
        value1: impl NumericInput,
        unit1: &str,
        value2: impl NumericInput,
        unit2: &str,
    ) -> Result<ComparisonResult> {
        let value1 = value1.to_number()?;
        let value2 = value2.to_number()?;
        let canonical = domain.canonical_unit();

        check_units(domain, unit1, unit2)?;

        let raw1 = convert_unrounded(domain, value1, unit1, canonical)?;
        let raw2 = convert_unrounded(domain, value2, unit2, canonical)?;

        let reported1 = self.to_canonical(domain, value1, unit1)?;
        let reported2 = self.to_canonical(domain, value2, unit2)?;

        let difference = round_to((raw1 - raw2).abs(), self.engine.precision_for(domain));

        let larger = if raw1 > raw2 {
            Larger::First
        } else if raw2 > raw1 {
            Larger::Second
        } else {
            Larger::Equal
        };

        Ok(ComparisonResult {
            value1: reported1,
            value2: reported2,
            unit: canonical,
            difference,
            larger,
        })
    }

    /// Same as [`compare`](Self::compare) for a textual type tag.
    pub fn compare_named(
        &self,
        type_name: &str,
        value1: impl NumericInput,
        unit1: &str,
        value2: impl NumericInput,
        unit2: &str,
    ) -> Result<ComparisonResult> {
        let value1 = value1.to_number()?;
        let value2 = value2.to_number()?;
        let domain: Domain = type_name.parse()?;
        self.compare(domain, value1, unit1, value2, unit2)
    }

    /// Infers the domain from the two unit codes, then compares.
    pub fn compare_measurements(
        &self,
        value1: impl NumericInput,
        unit1: &str,
        value2: impl NumericInput,
        unit2: &str,
    ) -> Result<ComparisonResult> {
        let first_domain = type_from_unit(unit1).ok_or_else(|| ConvertError::UnknownUnit {
            unit: unit1.to_string(),
        })?;
        let second_domain = type_from_unit(unit2).ok_or_else(|| ConvertError::UnknownUnit {
            unit: unit2.to_string(),
        })?;

        if first_domain != second_domain {
            return Err(ConvertError::UnitMismatch {
                first_unit: unit1.to_string(),
                first_domain,
                second_unit: unit2.to_string(),
                second_domain,
            });
        }

        self.compare(first_domain, value1, unit1, value2, unit2)
    }

    fn to_canonical(&self, domain: Domain, value: f64, unit: &str) -> Result<f64> {
        let canonical = domain.canonical_unit();
        if unit == canonical {
            return Ok(value);
        }
        self.engine.convert(domain, value, Some(unit), Some(canonical))
    }
}

/// Both units must be known and owned by `domain`, checked before any conversion.
fn check_units(domain: Domain, unit1: &str, unit2: &str) -> Result<()> {
    let owner = |unit: &str| {
        type_from_unit(unit).ok_or_else(|| ConvertError::UnsupportedUnit {
            unit: unit.to_string(),
            domain,
        })
    };
    let first_domain = owner(unit1)?;
    let second_domain = owner(unit2)?;

    if first_domain == domain && second_domain == domain {
        return Ok(());
    }

    // 兩邊都不屬於 domain 時沒有可對照的一方
    if first_domain != domain && second_domain != domain {
        return Err(ConvertError::UnsupportedUnit {
            unit: unit1.to_string(),
            domain,
        });
    }

    // 把不屬於 domain 的那一邊放在第二位
    let (first_unit, first_domain, second_unit, second_domain) = if first_domain == domain {
        (unit1, first_domain, unit2, second_domain)
    } else {
        (unit2, second_domain, unit1, first_domain)
    };

    Err(ConvertError::UnitMismatch {
        first_unit: first_unit.to_string(),
        first_domain,
        second_unit: second_unit.to_string(),
        second_domain,
    })
}
