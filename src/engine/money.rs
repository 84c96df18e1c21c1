//! Decimal arithmetic for money.
//!
//! Amounts live as `f64` on items and results. Every calculation converts
//! them to [`Decimal`], does its arithmetic there and converts back once.

use rust_decimal::prelude::*;

/// Kopeck precision.
const KOPECKS: u32 = 2;

/// Significant digits an `f64` carries reliably.
const F64_DIGITS: u32 = 15;

/// Converts an amount to [`Decimal`]. Binary noise beyond the precision
/// of `f64` is dropped, so `1.005` stays `1.005`. Non-finite or
/// out-of-range values become zero.
#[must_use]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(|d| d.round_sf(F64_DIGITS).unwrap_or(d))
        .unwrap_or_default()
        .normalize()
}

/// Converts a calculated [`Decimal`] back for storage.
#[must_use]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Half-up kopeck rounding.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(KOPECKS, RoundingStrategy::MidpointAwayFromZero)
}

/// `percent` of `amount`.
#[must_use]
pub fn percent_of(amount: Decimal, percent: f64) -> Decimal {
    amount * to_decimal(percent) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn conversion_drops_binary_noise() {
        assert_eq!(to_decimal(0.1) + to_decimal(0.2), dec!(0.3));
        assert_eq!(to_decimal(1.005), dec!(1.005));
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn kopeck_midpoint_rounds_up() {
        assert_eq!(round_money(to_decimal(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(19.999)), dec!(20.00));
        assert_eq!(to_f64(round_money(to_decimal(1.005))), 1.01);
    }

    #[test]
    fn accumulated_kopecks_stay_exact() {
        let total: Decimal = (0..1000).map(|_| to_decimal(0.01)).sum();
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn percent_of_amount() {
        assert_eq!(percent_of(dec!(1000), 20.0), dec!(200));
        assert_eq!(percent_of(dec!(684730), 3.0), dec!(20541.9));
    }
}
