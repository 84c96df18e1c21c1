use crate::engine::money::{to_decimal, to_f64};
use serde::{Deserialize, Serialize};

/// Document sections shared by generated items.
pub mod section {
    pub const BOWL: &str = "Чаша бассейна";
    pub const EQUIPMENT: &str = "Оборудование";
    pub const HEATING: &str = "Подогрев";
    pub const ADDITIONAL: &str = "Дополнительное оборудование";
    pub const INSTALLATION: &str = "Монтажные работы";
    pub const CONSTRUCTION: &str = "Строительные работы";
}

/// Pricing category of a line item. Decides its breakdown bucket and
/// whether work-only coefficients apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bowl,
    Filtration,
    Heating,
    Parts,
    Additional,
    Works,
    Materials,
}

impl Category {
    #[must_use]
    pub fn bucket(self) -> Bucket {
        match self {
            Category::Bowl | Category::Filtration | Category::Heating | Category::Parts => {
                Bucket::Equipment
            }
            Category::Works => Bucket::Works,
            Category::Materials => Bucket::Materials,
            Category::Additional => Bucket::Additional,
        }
    }

    #[must_use]
    pub fn is_works(self) -> bool {
        self == Category::Works
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Equipment,
    Works,
    Materials,
    Additional,
}

/// Where an item's price came from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatedBy {
    Manual,
    Formula,
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateItem {
    pub id: String,
    pub name: String,
    pub section: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
    pub total: f64,
    pub base_price: f64,
    pub applied_coefficient: f64,
    pub calculated_by: CalculatedBy,
}

impl EstimateItem {
    /// Builds an unpriced item; follow with [`EstimateItem::priced`].
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        section: &str,
        category: Category,
        unit: &str,
        calculated_by: CalculatedBy,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            section: section.to_string(),
            category,
            quantity: 0.0,
            unit: unit.to_string(),
            price: 0.0,
            total: 0.0,
            base_price: 0.0,
            applied_coefficient: 1.0,
            calculated_by,
        }
    }

    /// Sets unit price and quantity with the exact `total = price × quantity`.
    /// Rounding happens once, when coefficients are applied.
    #[must_use]
    pub fn priced(mut self, price: f64, quantity: f64) -> Self {
        self.price = price;
        self.base_price = price;
        self.quantity = quantity;
        self.total = to_f64(to_decimal(price) * to_decimal(quantity));
        self
    }

    /// Overrides the computed total, for items priced as a lump sum.
    #[must_use]
    pub fn with_total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }
}
