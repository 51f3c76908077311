use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::sync::LazyLock;

// optional sign, digits with optional fraction (or a bare fraction), optional exponent
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("number pattern is a valid regex")
});

/// Parses a decimal number written as `[+-]digits[.digits][e[+-]digits]`.
///
/// Surrounding whitespace, hex literals, `Infinity`, `NaN` and digit
/// separators are all rejected, as is anything that overflows to a
/// non-finite value.
pub fn parse_number(input: &str) -> Result<f64> {
    if !NUMBER_PATTERN.is_match(input) {
        return Err(invalid(input));
    }

    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid(input)),
    }
}

/// Rounds `value` to `places` decimal places.
///
/// Follows fixed-point formatting of the exact binary value, so `1.005`
/// (stored slightly below the midpoint) rounds down. Exact midpoints such
/// as `0.125` round half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;

    // 乘積落在 .5 不代表原值剛好在中點 (0.85 實際上略小於 0.85)
    let rounded = if scaled.fract().abs() == 0.5 && is_exact_midpoint(value, places as usize) {
        scaled.round() / factor
    } else {
        format!("{:.*}", places as usize, value)
            .parse::<f64>()
            .unwrap_or(value)
    };

    // "-0.00" parses back as negative zero
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// True when the digits of `value` past `places` are exactly `5000...`.
fn is_exact_midpoint(value: f64, places: usize) -> bool {
    // 1100 fractional digits cover the full expansion of any f64
    let exact = format!("{:.1100}", value);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };

    fraction
        .get(places..)
        .and_then(|dropped| dropped.strip_prefix('5'))
        .is_some_and(|rest| rest.bytes().all(|digit| digit == b'0'))
}

fn invalid(input: &str) -> ConvertError {
    ConvertError::InvalidNumber {
        input: input.to_string(),
    }
}

/// Anything a caller may hand the engine as a measured value.
pub trait NumericInput {
    fn to_number(&self) -> Result<f64>;
}

impl NumericInput for f64 {
    fn to_number(&self) -> Result<f64> {
        if self.is_finite() {
            Ok(*self)
        } else {
            Err(invalid(&self.to_string()))
        }
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> Result<f64> {
        f64::from(*self).to_number()
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl NumericInput for $ty {
                fn to_number(&self) -> Result<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

integer_input!(i32, i64, u32);

impl NumericInput for str {
    fn to_number(&self) -> Result<f64> {
        parse_number(self)
    }
}

impl NumericInput for String {
    fn to_number(&self) -> Result<f64> {
        parse_number(self)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> Result<f64> {
        (**self).to_number()
    }
}
