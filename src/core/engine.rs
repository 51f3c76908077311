use crate::core::distance::convert_distance;
use crate::core::numeric::{round_to, NumericInput};
use crate::core::temperature::convert_temperature;
use crate::core::weight::convert_weight;
use crate::core::ConfigProvider;
use crate::domain::model::Domain;
use crate::utils::error::{ConvertError, Result};

/// Routes a value to the converter for its domain, without rounding.
pub fn convert_unrounded(domain: Domain, value: f64, from: &str, to: &str) -> Result<f64> {
    match domain {
        Domain::Distance => convert_distance(value, from, to),
        Domain::Weight => convert_weight(value, from, to),
        Domain::Temperature => convert_temperature(value, from, to),
    }
}

/// Conversion facade: validates input, fills in default units, dispatches by
/// domain and rounds to the configured precision.
pub struct ConversionEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ConversionEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn precision_for(&self, domain: Domain) -> u32 {
        self.config.precision_for(domain)
    }

    pub fn convert(
        &self,
        domain: Domain,
        value: impl NumericInput,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<f64> {
        let value = value.to_number()?;
        let (from, to) = self.resolve_units(domain, from, to)?;
        let converted = convert_unrounded(domain, value, from, to)?;
        Ok(round_to(converted, self.precision_for(domain)))
    }

    /// Same as [`convert`](Self::convert) for a textual type tag such as `"weight"`.
    pub fn convert_named(
        &self,
        type_name: &str,
        value: impl NumericInput,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<f64> {
        let value = value.to_number()?;
        let domain: Domain = type_name.parse()?;
        self.convert(domain, value, from, to)
    }

    /// Fills in configured temperature defaults for units the caller left out.
    pub fn resolve_units<'a>(
        &'a self,
        domain: Domain,
        from: Option<&'a str>,
        to: Option<&'a str>,
    ) -> Result<(&'a str, &'a str)> {
        // 只有溫度有預設單位
        let (default_from, default_to) = match domain {
            Domain::Temperature => (
                self.config.default_temperature_from(),
                self.config.default_temperature_to(),
            ),
            Domain::Distance | Domain::Weight => (None, None),
        };

        let from = from
            .or(default_from)
            .ok_or(ConvertError::MissingUnit { domain, side: "from" })?;
        let to = to
            .or(default_to)
            .ok_or(ConvertError::MissingUnit { domain, side: "to" })?;

        Ok((from, to))
    }
}
