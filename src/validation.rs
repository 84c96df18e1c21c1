//! Form-level checks run on raw operator input before a selection is built.
//!
//! The engine never calls these; it coerces whatever it receives.

use crate::error::ValidationError;
use crate::model::Dimensions;

const LENGTH_RANGE: (f64, f64) = (2.0, 25.0);
const WIDTH_RANGE: (f64, f64) = (2.0, 12.0);
const DEPTH_RANGE: (f64, f64) = (1.2, 3.0);

/// Checks that all sides are within the sizes the company builds.
/// Reports the first failing field.
pub fn validate_dimensions(dimensions: &Dimensions) -> Result<(), ValidationError> {
    check_range("length", dimensions.length, LENGTH_RANGE)?;
    check_range("width", dimensions.width, WIDTH_RANGE)?;
    check_range("depth", dimensions.depth, DEPTH_RANGE)
}

fn check_range(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// A price is finite, non-negative and has at most two decimals.
#[must_use]
pub fn is_valid_price(price: f64) -> bool {
    if !price.is_finite() || price < 0.0 {
        return false;
    }
    let text = price.to_string();
    text.split_once('.').map_or(0, |(_, decimals)| decimals.len()) <= 2
}

pub fn validate_price(field: &'static str, price: f64) -> Result<(), ValidationError> {
    if is_valid_price(price) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice {
            field,
            value: price,
        })
    }
}

/// Russian phone: optional `+7`, `8` or `7` prefix, then ten digits.
/// Spaces, dashes and parentheses are ignored.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    let digits = if let Some(rest) = cleaned.strip_prefix("+7") {
        rest
    } else if cleaned.len() == 11 && (cleaned.starts_with('7') || cleaned.starts_with('8')) {
        &cleaned[1..]
    } else {
        &cleaned
    };
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}
