use super::money::{percent_of, round_money, to_decimal, to_f64};
use crate::model::{CostBreakdown, EstimateItem};
use crate::tables::volume_discount_percent;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Sums item totals into their category buckets.
#[must_use]
pub fn breakdown(items: &[EstimateItem]) -> CostBreakdown {
    let mut breakdown = CostBreakdown::default();
    for item in items {
        breakdown.add(item.category.bucket(), item.total);
    }
    breakdown
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Discount {
    pub amount: Decimal,
    pub percent: f64,
}

/// Volume discount on `subtotal`: the single best tier reached by `volume`.
#[must_use]
pub fn volume_discount(subtotal: Decimal, volume: f64) -> Discount {
    let percent = volume_discount_percent(volume);
    Discount {
        amount: percent_of(subtotal, percent),
        percent,
    }
}

/// Tax charged on the discounted amount. Non-positive or non-finite rates
/// charge nothing.
#[must_use]
pub fn tax(discounted: Decimal, tax_rate: f64) -> Decimal {
    if tax_rate.is_finite() && tax_rate > 0.0 {
        percent_of(discounted, tax_rate)
    } else {
        Decimal::ZERO
    }
}

/// Sum of `round2(price × quantity)` over `items`, ignoring coefficients.
///
/// `price_overrides` replaces the unit price of the item with the matching
/// id. Negative prices and quantities count as zero.
#[must_use]
pub fn calculate_total(items: &[EstimateItem], price_overrides: &HashMap<String, f64>) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| {
            let price = price_overrides.get(&item.id).copied().unwrap_or(item.price);
            round_money(to_decimal(price.max(0.0)) * to_decimal(item.quantity.max(0.0)))
        })
        .sum();
    to_f64(total)
}
