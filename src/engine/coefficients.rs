//! Per-item price multipliers.
//!
//! Multipliers run as an ordered list of named stages. Today every stage is
//! a plain factor so order does not change the product; stages that stack
//! differently can be added without touching callers.

use super::money::{to_decimal, to_f64};
use super::rounding::RoundingStrategy;
use crate::model::{CalculationContext, Category, EstimateItem};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Regional,
    Seasonal,
    Complexity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Multiplier {
    pub stage: Stage,
    pub factor: f64,
    /// Applies only to items in the `works` category.
    pub works_only: bool,
}

impl Multiplier {
    fn applies_to(&self, category: Category) -> bool {
        !self.works_only || category.is_works()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoefficientPipeline {
    stages: Vec<Multiplier>,
}

impl CoefficientPipeline {
    /// Stages active for `context`: regional when a region is set, seasonal
    /// when a season is set and `apply_seasonal` holds, complexity when set.
    #[must_use]
    pub fn for_context(context: &CalculationContext, apply_seasonal: bool) -> Self {
        let mut stages = Vec::new();

        if let Some(region) = &context.region {
            stages.push(Multiplier {
                stage: Stage::Regional,
                factor: region.coefficient(),
                works_only: false,
            });
        }

        if let Some(season) = context.season.filter(|_| apply_seasonal) {
            stages.push(Multiplier {
                stage: Stage::Seasonal,
                factor: season.coefficient(),
                works_only: true,
            });
        }

        if let Some(complexity) = context.complexity {
            stages.push(Multiplier {
                stage: Stage::Complexity,
                factor: complexity.coefficient(),
                works_only: true,
            });
        }

        Self { stages }
    }

    #[must_use]
    pub fn stages(&self) -> &[Multiplier] {
        &self.stages
    }

    /// Combined factor for an item of `category`; one when no stage applies.
    #[must_use]
    pub fn coefficient_for(&self, category: Category) -> Decimal {
        self.stages
            .iter()
            .filter(|m| m.applies_to(category))
            .fold(Decimal::ONE, |acc, m| acc * to_decimal(m.factor))
    }

    /// Scales the item's total, rounds it to `money_decimals` and records
    /// the factor used. This is the only place item totals are rounded.
    #[must_use]
    pub fn apply(
        &self,
        mut item: EstimateItem,
        rounding: RoundingStrategy,
        money_decimals: u32,
    ) -> EstimateItem {
        let coefficient = self.coefficient_for(item.category);
        let total = to_decimal(item.total) * coefficient;
        item.total = to_f64(rounding.round(total, money_decimals));
        item.applied_coefficient = to_f64(coefficient);
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CalculatedBy;
    use crate::tables::{Complexity, Region, Season};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn item(category: Category, price: f64) -> EstimateItem {
        EstimateItem::new("i", "Item", "Section", category, "шт", CalculatedBy::Formula)
            .priced(price, 1.0)
    }

    #[test]
    fn moscow_summer_work() {
        let ctx = CalculationContext::default()
            .with_region(Region::Moscow)
            .with_season(Season::Summer);
        let pipeline = CoefficientPipeline::for_context(&ctx, true);
        let work = pipeline.apply(item(Category::Works, 1000.0), RoundingStrategy::Round, 0);
        assert_eq!(work.applied_coefficient, 1.38);
        assert_eq!(work.total, 1380.0);
    }

    #[test]
    fn seasonal_factor_skips_equipment() {
        let ctx = CalculationContext::default()
            .with_region(Region::Spb)
            .with_season(Season::Winter);
        let pipeline = CoefficientPipeline::for_context(&ctx, true);
        let pump = pipeline.apply(item(Category::Filtration, 1000.0), RoundingStrategy::Round, 0);
        assert_eq!(pump.applied_coefficient, 1.15);
        assert_eq!(pump.total, 1150.0);
    }

    #[test]
    fn seasonal_factor_can_be_disabled() {
        let ctx = CalculationContext::default().with_season(Season::Summer);
        let pipeline = CoefficientPipeline::for_context(&ctx, false);
        assert!(pipeline.stages().is_empty());
        assert_eq!(pipeline.coefficient_for(Category::Works), Decimal::ONE);
    }

    #[test]
    fn unknown_region_is_neutral() {
        let ctx = CalculationContext::default().with_region(Region::from("omsk".to_string()));
        let pipeline = CoefficientPipeline::for_context(&ctx, true);
        assert_eq!(pipeline.coefficient_for(Category::Bowl), Decimal::ONE);
    }

    #[test]
    fn complexity_stacks_after_season() {
        let ctx = CalculationContext::default()
            .with_season(Season::Fall)
            .with_complexity(Complexity::Custom);
        let pipeline = CoefficientPipeline::for_context(&ctx, true);
        let stages: Vec<Stage> = pipeline.stages().iter().map(|m| m.stage).collect();
        assert_eq!(stages, [Stage::Seasonal, Stage::Complexity]);
        let work = pipeline.apply(item(Category::Works, 1000.0), RoundingStrategy::Round, 0);
        assert_eq!(work.total, 1425.0);
        assert_eq!(pipeline.coefficient_for(Category::Additional), Decimal::ONE);
        assert_eq!(pipeline.coefficient_for(Category::Works), dec!(1.425));
    }

    #[test]
    fn floor_applies_to_the_full_product() {
        let pipeline = CoefficientPipeline::default();
        let item = item(Category::Parts, 333.333).priced(333.333, 3.0);
        assert_eq!(pipeline.apply(item.clone(), RoundingStrategy::Floor, 0).total, 999.0);
        assert_eq!(pipeline.apply(item, RoundingStrategy::Round, 2).total, 1000.0);
    }
}
