//! Project planning figures derived from pool size: material stock, crew
//! hours, build timeline and a VAT summary of cost groups.

use super::money::{percent_of, round_money, to_decimal, to_f64};
use crate::model::{BowlSelection, Dimensions};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Serialize;

/// Concrete is ordered with a 10% margin.
const CONCRETE_MARGIN: f64 = 1.1;
/// Tiles are ordered with a 5% margin.
const TILE_MARGIN: f64 = 1.05;
/// Waterproofing is ordered with a 10% margin.
const WATERPROOFING_MARGIN: f64 = 1.1;

const LABOR_HOURS_PER_CUBIC_METER: f64 = 20.0;
const MIN_LABOR_HOURS: f64 = 40.0;

const PREPARATION_DAYS: u32 = 7;
const CONSTRUCTION_DAYS_PER_CUBIC_METER: f64 = 2.0;
const FINISHING_DAYS_PER_CUBIC_METER: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialQuantities {
    /// m³
    pub concrete: f64,
    /// m²
    pub tiles: f64,
    /// m²
    pub waterproofing: f64,
}

impl MaterialQuantities {
    /// Unrounded amounts for a bowl of `dimensions`.
    #[must_use]
    pub fn for_dimensions(dimensions: &Dimensions) -> Self {
        let volume = dimensions.volume();
        let surface = dimensions.surface_area();
        Self {
            concrete: volume * CONCRETE_MARGIN,
            tiles: surface * TILE_MARGIN,
            waterproofing: surface * WATERPROOFING_MARGIN,
        }
    }
}

#[must_use]
pub fn labor_hours(volume: f64) -> f64 {
    (volume * LABOR_HOURS_PER_CUBIC_METER).max(MIN_LABOR_HOURS)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTimeline {
    pub preparation_days: u32,
    pub construction_days: u32,
    pub finishing_days: u32,
}

impl ProjectTimeline {
    /// A fixed week of preparation, then whole days per cubic meter for
    /// construction and finishing. Unusable volumes plan preparation only.
    #[must_use]
    pub fn for_volume(volume: f64) -> Self {
        let volume = to_decimal(volume).max(Decimal::ZERO);
        let days = |per_cubic_meter: f64| {
            (volume * to_decimal(per_cubic_meter))
                .ceil()
                .to_u32()
                .unwrap_or(u32::MAX)
        };
        Self {
            preparation_days: PREPARATION_DAYS,
            construction_days: days(CONSTRUCTION_DAYS_PER_CUBIC_METER),
            finishing_days: days(FINISHING_DAYS_PER_CUBIC_METER),
        }
    }

    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.preparation_days
            .saturating_add(self.construction_days)
            .saturating_add(self.finishing_days)
    }
}

/// Cost groups summed for a short VAT quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateTotalInput {
    /// Bowls priced as materials. Missing prices count as zero.
    pub bowls: Vec<BowlSelection>,
    pub labor_cost: f64,
    pub equipment_cost: f64,
    pub additional_costs: f64,
    /// Percent.
    pub vat_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalBreakdown {
    pub materials: f64,
    pub labor: f64,
    pub equipment: f64,
    pub additional: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateTotal {
    /// Before VAT.
    pub total: f64,
    pub breakdown: TotalBreakdown,
    pub vat: f64,
    pub grand_total: f64,
}

/// Sums the cost groups and adds VAT, both rounded to kopecks.
#[must_use]
pub fn calculate_estimate_total(input: &EstimateTotalInput) -> EstimateTotal {
    let materials: Decimal = input
        .bowls
        .iter()
        .filter_map(|bowl| bowl.price)
        .map(to_decimal)
        .sum();
    let labor = to_decimal(input.labor_cost);
    let equipment = to_decimal(input.equipment_cost);
    let additional = to_decimal(input.additional_costs);

    let subtotal = round_money(materials + labor + equipment + additional);
    let vat = round_money(percent_of(subtotal, input.vat_rate));

    EstimateTotal {
        total: to_f64(subtotal),
        breakdown: TotalBreakdown {
            materials: to_f64(materials),
            labor: to_f64(labor),
            equipment: to_f64(equipment),
            additional: to_f64(additional),
        },
        vat: to_f64(vat),
        grand_total: to_f64(subtotal + vat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bowl(price: f64) -> BowlSelection {
        BowlSelection {
            price: Some(price),
            ..BowlSelection::default()
        }
    }

    #[test]
    fn material_stock_margins() {
        // 100 m³ of water, 110 m² of floor and walls
        let q = MaterialQuantities::for_dimensions(&Dimensions::new(10.0, 5.0, 2.0));
        assert!((q.concrete - 110.0).abs() < 1e-9);
        assert!((q.tiles - 115.5).abs() < 1e-9);
        assert!((q.waterproofing - 121.0).abs() < 1e-9);
    }

    #[test]
    fn labor_hours_have_a_floor() {
        assert_eq!(labor_hours(48.0), 960.0);
        assert_eq!(labor_hours(1.5), 40.0);
        assert_eq!(labor_hours(0.0), 40.0);
    }

    #[test]
    fn timeline_rounds_days_up() {
        let timeline = ProjectTimeline::for_volume(39.2);
        // 78.4 → 79, 58.8 → 59
        assert_eq!(
            timeline,
            ProjectTimeline {
                preparation_days: 7,
                construction_days: 79,
                finishing_days: 59,
            }
        );
        assert_eq!(timeline.total_days(), 145);
        assert_eq!(ProjectTimeline::for_volume(48.0).total_days(), 7 + 96 + 72);
        assert_eq!(ProjectTimeline::for_volume(f64::NAN).total_days(), 7);
    }

    #[test]
    fn estimate_total_with_vat() {
        let total = calculate_estimate_total(&EstimateTotalInput {
            bowls: vec![bowl(100.0), bowl(200.0)],
            labor_cost: 300.0,
            equipment_cost: 150.0,
            additional_costs: 50.0,
            vat_rate: 20.0,
        });
        assert_eq!(total.total, 800.0);
        assert_eq!(
            total.breakdown,
            TotalBreakdown {
                materials: 300.0,
                labor: 300.0,
                equipment: 150.0,
                additional: 50.0,
            }
        );
        assert_eq!(total.vat, 160.0);
        assert_eq!(total.grand_total, 960.0);
    }

    #[test]
    fn estimate_total_edge_rates() {
        let zero = calculate_estimate_total(&EstimateTotalInput::default());
        assert_eq!((zero.total, zero.grand_total), (0.0, 0.0));

        let eighteen = calculate_estimate_total(&EstimateTotalInput {
            bowls: vec![BowlSelection::default()],
            labor_cost: 100.0,
            vat_rate: 18.0,
            ..EstimateTotalInput::default()
        });
        assert_eq!(eighteen.vat, 18.0);
        assert_eq!(eighteen.grand_total, 118.0);
    }
}
