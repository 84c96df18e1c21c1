use super::{Bucket, EstimateItem};
use crate::engine::money::{to_decimal, to_f64};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub equipment: f64,
    pub works: f64,
    pub materials: f64,
    pub additional: f64,
}

impl CostBreakdown {
    pub fn add(&mut self, bucket: Bucket, amount: f64) {
        let slot = match bucket {
            Bucket::Equipment => &mut self.equipment,
            Bucket::Works => &mut self.works,
            Bucket::Materials => &mut self.materials,
            Bucket::Additional => &mut self.additional,
        };
        *slot = to_f64(to_decimal(*slot) + to_decimal(amount));
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        to_f64(
            [self.equipment, self.works, self.materials, self.additional]
                .into_iter()
                .map(to_decimal)
                .sum(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub items: Vec<EstimateItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub discount_percent: f64,
    pub tax: f64,
    pub total: f64,
    pub breakdown: CostBreakdown,
    pub volume: f64,
    pub surface_area: f64,
}

impl CalculationResult {
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&EstimateItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Distinct sections in first-seen order.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for item in &self.items {
            if !sections.contains(&item.section.as_str()) {
                sections.push(&item.section);
            }
        }
        sections
    }
}
