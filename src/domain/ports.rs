use crate::domain::model::Domain;

/// Decimal places used when no precision is configured for a domain.
pub const DEFAULT_PRECISION: u32 = 2;

pub trait ConfigProvider: Send + Sync {
    /// Decimal places results in `domain` are rounded to.
    fn precision_for(&self, domain: Domain) -> u32;
    fn default_temperature_from(&self) -> Option<&str>;
    fn default_temperature_to(&self) -> Option<&str>;
}
