use super::money::{to_decimal, to_f64};
use crate::error::InputError;
use rust_decimal::{Decimal, RoundingStrategy as DecimalRounding};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingStrategy {
    #[default]
    Round,
    Floor,
    Ceil,
}

impl RoundingStrategy {
    /// Rounds `value` to `decimals` places: half away from zero, toward
    /// negative infinity or toward positive infinity. A precision finer
    /// than the value already carries leaves it unchanged.
    #[must_use]
    pub fn round(self, value: Decimal, decimals: u32) -> Decimal {
        let strategy = match self {
            RoundingStrategy::Round => DecimalRounding::MidpointAwayFromZero,
            RoundingStrategy::Floor => DecimalRounding::ToNegativeInfinity,
            RoundingStrategy::Ceil => DecimalRounding::ToPositiveInfinity,
        };
        value.round_dp_with_strategy(decimals, strategy)
    }

    /// [`RoundingStrategy::round`] for measures kept as `f64`.
    #[must_use]
    pub fn apply(self, value: f64, decimals: u32) -> f64 {
        to_f64(self.round(to_decimal(value), decimals))
    }
}

impl FromStr for RoundingStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round" => Ok(RoundingStrategy::Round),
            "floor" => Ok(RoundingStrategy::Floor),
            "ceil" => Ok(RoundingStrategy::Ceil),
            _ => Err(InputError::UnknownKeyword {
                kind: "rounding strategy",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoundingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundingStrategy::Round => "round",
            RoundingStrategy::Floor => "floor",
            RoundingStrategy::Ceil => "ceil",
        })
    }
}
