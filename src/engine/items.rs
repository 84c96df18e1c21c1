//! Turns a [`Selection`] into flat line items.
//!
//! Items come out in document order: bowl or shell, filtration, embedded
//! parts, heating, additional equipment, formula works, manual works and
//! finally the installation companions of priced sub-items.

use super::money::{to_decimal, to_f64};
use super::rounding::RoundingStrategy;
use crate::model::selection::POLYPROPYLENE;
use crate::model::{
    section, CalculatedBy, Category, Dimensions, EquipmentRef, EquipmentSlot, EstimateItem,
    Selection,
};
use crate::tables::WORK_FORMULAS;

/// One skimmer serves this many cubic meters.
const SKIMMER_VOLUME: f64 = 25.0;
/// One return nozzle serves this many cubic meters.
const NOZZLE_VOLUME: f64 = 7.0;

/// Generates every line item for `selection` on a pool of `dimensions`.
///
/// `rounding` and `measure_decimals` govern the pool volume and the formula
/// quantities; item totals are rounded to kopecks here and to the engine's
/// money precision once coefficients are applied.
#[must_use]
pub fn generate_items(
    selection: &Selection,
    dimensions: &Dimensions,
    rounding: RoundingStrategy,
    measure_decimals: u32,
) -> Vec<EstimateItem> {
    let dimensions = dimensions.normalized();
    let volume = rounding.apply(dimensions.volume(), measure_decimals);

    let mut items = Vec::new();
    items.extend(bowl_items(selection, volume));
    if let Some(filtration) = &selection.filtration {
        items.extend(filtration_items(filtration));
    }
    if let Some(parts) = &selection.parts {
        items.extend(parts_items(parts, volume));
    }
    if let Some(heating) = &selection.heating {
        items.extend(heating_items(heating));
    }
    items.extend(additional_items(&selection.additional));
    items.extend(work_formula_items(&dimensions, rounding, measure_decimals));
    items.extend(manual_work_items(selection));
    items.extend(installation_items(selection, volume));
    items
}

fn bowl_items(selection: &Selection, volume: f64) -> Option<EstimateItem> {
    let material = selection.material.as_ref();

    if let Some(material) = material.filter(|m| m.is(POLYPROPYLENE)) {
        if selection.bowl.is_none() {
            let name = material.name.as_deref().unwrap_or("PP");
            return Some(
                EstimateItem::new(
                    "bowl_poly_weld",
                    format!("Изготовление чаши из полипропилена ({name})"),
                    section::BOWL,
                    Category::Materials,
                    "м³",
                    CalculatedBy::Formula,
                )
                .priced(material.price_per_cubic_meter(), volume),
            );
        }
    }

    let bowl = selection.bowl.as_ref()?;
    let item_ref = EquipmentRef {
        name: bowl.name.clone(),
        price: bowl.price,
        ..EquipmentRef::default()
    };
    Some(
        EstimateItem::new(
            format!("bowl-{}", bowl.id.as_deref().unwrap_or("main")),
            item_ref.display_name("Чаша бассейна"),
            section::BOWL,
            Category::Bowl,
            "шт",
            CalculatedBy::Catalog,
        )
        .priced(item_ref.effective_price(), 1.0),
    )
}

fn filtration_items(slot: &EquipmentSlot) -> Vec<EstimateItem> {
    if slot.items().is_empty() {
        let head = slot.head();
        return vec![EstimateItem::new(
            format!("filtration-{}", head.id.as_deref().unwrap_or("main")),
            head.display_name("Система фильтрации"),
            section::EQUIPMENT,
            Category::Filtration,
            "комплект",
            CalculatedBy::Catalog,
        )
        .priced(head.effective_price(), 1.0)];
    }

    slot.items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            EstimateItem::new(
                format!("filtration_{idx}"),
                item.display_name("Фильтрация"),
                section::EQUIPMENT,
                Category::Filtration,
                item.unit.as_deref().unwrap_or("шт"),
                CalculatedBy::Catalog,
            )
            .priced(item.effective_price(), item.stated_quantity())
        })
        .collect()
}

/// Quantity of an embedded part: skimmers and nozzles scale with volume,
/// anything else keeps its stated quantity.
#[must_use]
pub fn part_quantity(item: &EquipmentRef, volume: f64) -> f64 {
    if volume > 0.0 {
        if item.is_kind("skimmer") {
            return (volume / SKIMMER_VOLUME).ceil();
        }
        if item.is_kind("nozzle") {
            return (volume / NOZZLE_VOLUME).ceil();
        }
    }
    item.stated_quantity()
}

fn parts_items(slot: &EquipmentSlot, volume: f64) -> Vec<EstimateItem> {
    if slot.items().is_empty() {
        let head = slot.head();
        if !head.has_catalog_data() {
            return Vec::new();
        }
        return vec![EstimateItem::new(
            "parts_main",
            head.display_name("Закладные детали"),
            section::EQUIPMENT,
            Category::Parts,
            "компл",
            CalculatedBy::Catalog,
        )
        .priced(head.effective_price(), 1.0)];
    }

    slot.items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            EstimateItem::new(
                format!("part_{idx}"),
                item.display_name("Деталь"),
                section::EQUIPMENT,
                Category::Parts,
                "шт",
                CalculatedBy::Catalog,
            )
            .priced(item.effective_price(), part_quantity(item, volume))
        })
        .collect()
}

fn heating_items(slot: &EquipmentSlot) -> Vec<EstimateItem> {
    if slot.items().is_empty() {
        let head = slot.head();
        return vec![EstimateItem::new(
            format!("heating-{}", head.id.as_deref().unwrap_or("main")),
            head.display_name("Нагреватель"),
            section::HEATING,
            Category::Heating,
            "шт",
            CalculatedBy::Catalog,
        )
        .priced(head.effective_price(), 1.0)];
    }

    slot.items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            EstimateItem::new(
                format!("heat_{idx}"),
                item.display_name("Нагреватель"),
                section::HEATING,
                Category::Heating,
                "шт",
                CalculatedBy::Catalog,
            )
            .priced(item.effective_price(), item.stated_quantity())
        })
        .collect()
}

fn additional_items(additional: &[EquipmentRef]) -> Vec<EstimateItem> {
    additional
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let id = item.id.clone().unwrap_or_else(|| idx.to_string());
            EstimateItem::new(
                format!("additional-{id}"),
                item.display_name("Дополнительное оборудование"),
                section::ADDITIONAL,
                Category::Additional,
                item.unit.as_deref().unwrap_or("шт"),
                CalculatedBy::Catalog,
            )
            .priced(item.effective_price(), item.stated_quantity())
        })
        .collect()
}

fn work_formula_items(
    dimensions: &Dimensions,
    rounding: RoundingStrategy,
    measure_decimals: u32,
) -> Vec<EstimateItem> {
    WORK_FORMULAS
        .iter()
        .map(|work| {
            let raw = (work.formula)(dimensions);
            let quantity = rounding.apply(raw, measure_decimals).max(work.min_quantity);
            EstimateItem::new(
                format!("work-{}", work.id),
                work.name,
                work.section,
                Category::Works,
                work.unit,
                CalculatedBy::Formula,
            )
            .priced(work.price_per_unit, quantity)
        })
        .filter(|item| item.quantity > 0.0)
        .collect()
}

fn manual_work_items(selection: &Selection) -> Vec<EstimateItem> {
    let Some(works) = &selection.works else {
        return Vec::new();
    };

    works
        .entries()
        .into_iter()
        .map(|(id, work)| {
            let quantity = work.quantity.filter(|q| q.is_finite() && *q > 0.0).unwrap_or(1.0);
            let total = if work.total.is_finite() {
                work.total.max(0.0)
            } else {
                0.0
            };
            EstimateItem::new(
                format!("work_{id}"),
                work.name.clone().unwrap_or_else(|| "Работы".to_string()),
                section::CONSTRUCTION,
                Category::Works,
                work.unit.as_deref().unwrap_or("ед"),
                CalculatedBy::Manual,
            )
            .priced(to_f64(to_decimal(total) / to_decimal(quantity)), quantity)
            .with_total(total)
        })
        .collect()
}

fn installation_items(selection: &Selection, volume: f64) -> Vec<EstimateItem> {
    let mut items = Vec::new();

    if let Some(parts) = &selection.parts {
        for (idx, item) in parts.items().iter().enumerate() {
            if let Some(price) = item.installation_price() {
                items.push(installation(
                    format!("inst_part_{idx}"),
                    &item.display_name("Деталь"),
                    price,
                    part_quantity(item, volume),
                ));
            }
        }
    }

    if let Some(heating) = &selection.heating {
        if heating.items().is_empty() {
            if let Some(price) = heating.head().installation_price() {
                items.push(installation(
                    "inst_heat".to_string(),
                    &heating.head().display_name("Нагреватель"),
                    price,
                    1.0,
                ));
            }
        }
        for (idx, item) in heating.items().iter().enumerate() {
            if let Some(price) = item.installation_price() {
                items.push(installation(
                    format!("inst_heat_{idx}"),
                    &item.display_name("Нагреватель"),
                    price,
                    item.stated_quantity(),
                ));
            }
        }
    }

    for (idx, item) in selection.additional.iter().enumerate() {
        if let Some(price) = item.installation_price() {
            items.push(installation(
                format!("inst_add_{idx}"),
                &item.display_name("Оборудование"),
                price,
                item.stated_quantity(),
            ));
        }
    }

    items
}

fn installation(id: String, name: &str, price: f64, quantity: f64) -> EstimateItem {
    EstimateItem::new(
        id,
        format!("Монтаж: {name}"),
        section::INSTALLATION,
        Category::Works,
        "шт",
        CalculatedBy::Catalog,
    )
    .priced(price, quantity)
}
