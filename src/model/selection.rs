use super::Dimensions;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Equipment and service choices assembled by the sales operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    pub bowl: Option<BowlSelection>,
    pub material: Option<MaterialSelection>,
    pub filtration: Option<EquipmentSlot>,
    pub heating: Option<EquipmentSlot>,
    pub parts: Option<EquipmentSlot>,
    #[serde(deserialize_with = "null_as_empty")]
    pub additional: Vec<EquipmentRef>,
    pub works: Option<WorksSelection>,
    pub dimensions: Option<Dimensions>,
}

/// A catalog entry or a sub-item of a composite slot.
///
/// Catalog data is loose: `name`/`model` and `price`/`unitPrice` are
/// aliases, and any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentRef {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub price: Option<f64>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub installation_price: Option<f64>,
}

impl EquipmentRef {
    #[must_use]
    pub fn named(name: &str, price: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price),
            ..Self::default()
        }
    }

    /// `name`, then `model`, then the caller's placeholder.
    #[must_use]
    pub fn display_name(&self, placeholder: &str) -> String {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.model.as_deref()))
            .unwrap_or(placeholder)
            .to_string()
    }

    /// First usable of `price` and `unitPrice`, otherwise zero.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        positive(self.price)
            .or_else(|| positive(self.unit_price))
            .unwrap_or(0.0)
    }

    /// Stated quantity; missing or non-positive values count as one.
    #[must_use]
    pub fn stated_quantity(&self) -> f64 {
        positive(self.quantity).unwrap_or(1.0)
    }

    #[must_use]
    pub fn installation_price(&self) -> Option<f64> {
        positive(self.installation_price)
    }

    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    /// Carries a name, a model or a usable price.
    #[must_use]
    pub fn has_catalog_data(&self) -> bool {
        non_empty(self.name.as_deref()).is_some()
            || non_empty(self.model.as_deref()).is_some()
            || self.effective_price() > 0.0
    }
}

/// A slot holding a list of sub-items plus group-level catalog fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeEquipment {
    pub items: Vec<EquipmentRef>,
    #[serde(flatten)]
    pub head: EquipmentRef,
}

/// An equipment slot is either one catalog object or a composite with
/// `items[]`. The presence of `items` decides the variant, and a
/// sub-item that fails to decode fails the whole slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EquipmentSlot {
    Composite(CompositeEquipment),
    Single(EquipmentRef),
}

impl<'de> Deserialize<'de> for EquipmentSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawSlot {
            items: Option<Vec<EquipmentRef>>,
            #[serde(flatten)]
            head: EquipmentRef,
        }

        let raw = RawSlot::deserialize(deserializer)?;
        Ok(match raw.items {
            Some(items) => EquipmentSlot::Composite(CompositeEquipment {
                items,
                head: raw.head,
            }),
            None => EquipmentSlot::Single(raw.head),
        })
    }
}

impl EquipmentSlot {
    #[must_use]
    pub fn single(item: EquipmentRef) -> Self {
        EquipmentSlot::Single(item)
    }

    #[must_use]
    pub fn composite(items: Vec<EquipmentRef>) -> Self {
        EquipmentSlot::Composite(CompositeEquipment {
            items,
            head: EquipmentRef::default(),
        })
    }

    /// Group-level catalog fields.
    #[must_use]
    pub fn head(&self) -> &EquipmentRef {
        match self {
            EquipmentSlot::Composite(c) => &c.head,
            EquipmentSlot::Single(item) => item,
        }
    }

    /// Sub-items; empty for single slots.
    #[must_use]
    pub fn items(&self) -> &[EquipmentRef] {
        match self {
            EquipmentSlot::Composite(c) => &c.items,
            EquipmentSlot::Single(_) => &[],
        }
    }
}

/// A prefabricated bowl from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BowlSelection {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
}

impl BowlSelection {
    /// Catalog dimensions, when all three sides are listed.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions::new(
            positive(self.length)?,
            positive(self.width)?,
            positive(self.depth)?,
        ))
    }
}

pub const POLYPROPYLENE: &str = "polypropylene";

/// Shell material picked instead of, or alongside, a catalog bowl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialSelection {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub base_price_per_cubic_meter: Option<f64>,
}

impl MaterialSelection {
    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Price per cubic meter of welded shell.
    #[must_use]
    pub fn price_per_cubic_meter(&self) -> f64 {
        positive(self.base_price_per_cubic_meter).unwrap_or(15_000.0)
    }
}

/// A construction work chosen by hand, priced as a lump sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkSelection {
    pub id: Option<String>,
    pub name: Option<String>,
    pub total: f64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Chosen works arrive either keyed by work id or as a plain list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorksSelection {
    List(Vec<WorkSelection>),
    Map(BTreeMap<String, WorkSelection>),
}

impl WorksSelection {
    /// Works with their ids. Map entries without an explicit id use their key;
    /// list entries fall back to their position.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, &WorkSelection)> {
        match self {
            WorksSelection::List(list) => list
                .iter()
                .enumerate()
                .map(|(idx, work)| (work.id.clone().unwrap_or_else(|| idx.to_string()), work))
                .collect(),
            WorksSelection::Map(map) => map
                .iter()
                .map(|(key, work)| (work.id.clone().unwrap_or_else(|| key.clone()), work))
                .collect(),
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
