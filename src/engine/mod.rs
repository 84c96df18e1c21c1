//! The estimate calculation pipeline.

pub mod coefficients;
pub mod config;
pub mod items;
pub mod money;
pub mod planning;
pub mod rounding;
pub mod totals;

pub use coefficients::{CoefficientPipeline, Multiplier, Stage};
pub use config::EngineConfig;
pub use items::generate_items;
pub use planning::{
    calculate_estimate_total, EstimateTotal, EstimateTotalInput, MaterialQuantities,
    ProjectTimeline,
};
pub use rounding::RoundingStrategy;
pub use totals::{calculate_total, Discount};

use crate::model::{CalculationContext, CalculationResult, Dimensions, EstimateItem};
use money::{to_decimal, to_f64};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Computes estimates from a [`CalculationContext`].
///
/// The engine holds only its configuration, so one instance can serve any
/// number of callers; `calculate` is a pure function of context and config.
#[derive(Debug, Clone, Default)]
pub struct EstimateEngine {
    config: EngineConfig,
}

impl EstimateEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline: items, coefficients, breakdown, discount,
    /// tax and rounding.
    ///
    /// # Example
    ///
    /// ```
    /// use pool_estimator::engine::{EngineConfig, EstimateEngine};
    /// use pool_estimator::model::{CalculationContext, Dimensions, Selection};
    ///
    /// let engine = EstimateEngine::new(EngineConfig::default());
    /// let ctx = CalculationContext::new(Selection::default(), Dimensions::new(10.0, 5.0, 1.0));
    /// let result = engine.calculate(&ctx);
    /// assert_eq!(result.discount_percent, 3.0);
    /// ```
    #[must_use]
    pub fn calculate(&self, context: &CalculationContext) -> CalculationResult {
        let dimensions = context.resolved_dimensions();
        if let Some(given) = context.dimensions.filter(|d| !d.is_normalized()) {
            warn!(?given, used = ?dimensions, "unusable pool dimensions replaced by defaults");
        }

        let volume = self.calculate_volume(&dimensions);
        let surface_area = self.calculate_surface_area(&dimensions);

        let generated = generate_items(
            &context.selection,
            &dimensions,
            self.config.rounding_strategy,
            self.config.measure_decimals,
        );
        debug!(count = generated.len(), volume, surface_area, "items generated");

        self.assemble(context, generated, volume, surface_area)
    }

    /// Prices already generated items: coefficients, breakdown, discount,
    /// tax and rounding. `volume` selects the discount tier.
    #[must_use]
    pub fn assemble(
        &self,
        context: &CalculationContext,
        items: Vec<EstimateItem>,
        volume: f64,
        surface_area: f64,
    ) -> CalculationResult {
        let pipeline =
            CoefficientPipeline::for_context(context, self.config.apply_seasonal_coefficients);
        let items: Vec<EstimateItem> = items
            .into_iter()
            .map(|item| {
                pipeline.apply(
                    item,
                    self.config.rounding_strategy,
                    self.config.money_decimals,
                )
            })
            .collect();
        debug!(stages = pipeline.stages().len(), "coefficients applied");

        let breakdown = totals::breakdown(&items);
        let subtotal = self.round_money(items.iter().map(|i| to_decimal(i.total)).sum());

        let discount = totals::volume_discount(subtotal, volume);
        let discount_amount = self.round_money(discount.amount);
        debug!(%subtotal, percent = discount.percent, "volume discount");

        let tax = self.round_money(totals::tax(subtotal - discount_amount, self.config.tax_rate));
        let total = self.round_money(subtotal - discount_amount + tax);

        CalculationResult {
            items,
            subtotal: to_f64(subtotal),
            discount: to_f64(discount_amount),
            discount_percent: discount.percent,
            tax: to_f64(tax),
            total: to_f64(total),
            breakdown,
            volume,
            surface_area,
        }
    }

    /// Water volume in m³. Unusable sides fall back to 8 × 4 × 1.5.
    #[must_use]
    pub fn calculate_volume(&self, dimensions: &Dimensions) -> f64 {
        self.round_measure(dimensions.normalized().volume())
    }

    /// Floor plus wall area in m².
    #[must_use]
    pub fn calculate_surface_area(&self, dimensions: &Dimensions) -> f64 {
        self.round_measure(dimensions.normalized().surface_area())
    }

    /// Filtration flow (m³/h) turning the volume over in `turnover_hours`.
    /// Advisory only. Non-positive turnover falls back to 4 hours.
    #[must_use]
    pub fn calculate_required_flow(&self, volume: f64, turnover_hours: f64) -> f64 {
        let hours = if turnover_hours.is_finite() && turnover_hours > 0.0 {
            turnover_hours
        } else {
            DEFAULT_TURNOVER_HOURS
        };
        self.round_measure(volume / hours)
    }

    /// Heater power (kW), about 0.5 kW per m³. Advisory only.
    #[must_use]
    pub fn calculate_required_heating(&self, volume: f64) -> f64 {
        self.round_measure(volume * 0.5)
    }

    /// Concrete, tile and waterproofing amounts with their stock margins.
    #[must_use]
    pub fn calculate_material_quantities(&self, dimensions: &Dimensions) -> MaterialQuantities {
        let raw = MaterialQuantities::for_dimensions(&dimensions.normalized());
        MaterialQuantities {
            concrete: self.round_measure(raw.concrete),
            tiles: self.round_measure(raw.tiles),
            waterproofing: self.round_measure(raw.waterproofing),
        }
    }

    /// Crew hours: 20 per m³, never less than 40.
    #[must_use]
    pub fn calculate_labor_hours(&self, volume: f64) -> f64 {
        self.round_measure(planning::labor_hours(volume))
    }

    #[must_use]
    pub fn calculate_project_timeline(&self, volume: f64) -> ProjectTimeline {
        ProjectTimeline::for_volume(volume)
    }

    #[must_use]
    pub fn round(&self, value: f64, decimals: u32) -> f64 {
        self.config.rounding_strategy.apply(value, decimals)
    }

    fn round_money(&self, value: Decimal) -> Decimal {
        self.config
            .rounding_strategy
            .round(value, self.config.money_decimals)
    }

    fn round_measure(&self, value: f64) -> f64 {
        self.round(value, self.config.measure_decimals)
    }
}

pub const DEFAULT_TURNOVER_HOURS: f64 = 4.0;
