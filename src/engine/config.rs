use super::rounding::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Engine options fixed at construction. Every key is optional when
/// deserialized; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Company markup. Reserved; `calculate` does not apply it yet.
    pub margin_percent: f64,
    /// Tax (VAT) percent charged on the discounted subtotal.
    pub tax_rate: f64,
    pub rounding_strategy: RoundingStrategy,
    pub apply_seasonal_coefficients: bool,
    /// Decimal places for money fields.
    pub money_decimals: u32,
    /// Decimal places for volume, area and work quantities.
    pub measure_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            margin_percent: 15.0,
            tax_rate: 0.0,
            rounding_strategy: RoundingStrategy::Round,
            apply_seasonal_coefficients: true,
            money_decimals: 0,
            measure_decimals: 1,
        }
    }
}
