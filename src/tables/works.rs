//! Catalog of construction works priced from pool dimensions.
//!
//! Each formula receives normalized [`Dimensions`] and returns a raw
//! quantity. The ratios below are construction constants: the pit is
//! 0.5 m wider on every side and 0.3 m deeper than the bowl, loose soil
//! swells by 1.3, and the slab under the bowl is 15 cm thick.

use crate::model::Dimensions;

#[derive(Debug, Clone, Copy)]
pub struct WorkFormula {
    pub id: &'static str,
    pub name: &'static str,
    pub section: &'static str,
    pub unit: &'static str,
    pub price_per_unit: f64,
    pub formula: fn(&Dimensions) -> f64,
    /// Quantity floor; entries with a floor are never filtered out.
    pub min_quantity: f64,
}

const EARTHWORKS: &str = "Земляные работы";
const CONCRETE: &str = "Бетонные работы";
const INSTALLATION: &str = "Монтажные работы";
const FINISHING: &str = "Отделочные работы";

pub const WORK_FORMULAS: &[WorkFormula] = &[
    WorkFormula {
        id: "excavation",
        name: "Копка котлована",
        section: EARTHWORKS,
        unit: "м³",
        price_per_unit: 2500.0,
        formula: excavation,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "backfill",
        name: "Обратная засыпка",
        section: EARTHWORKS,
        unit: "м³",
        price_per_unit: 1500.0,
        formula: backfill,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "soil_removal",
        name: "Вывоз грунта",
        section: EARTHWORKS,
        unit: "м³",
        price_per_unit: 800.0,
        formula: soil_removal,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "concrete_pad",
        name: "Бетонная подушка",
        section: CONCRETE,
        unit: "м³",
        price_per_unit: 8000.0,
        formula: concrete_pad,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "concrete_belt",
        name: "Бетонный пояс",
        section: CONCRETE,
        unit: "м.п.",
        price_per_unit: 4500.0,
        formula: concrete_belt,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "bowl_installation",
        name: "Монтаж чаши",
        section: INSTALLATION,
        unit: "шт",
        price_per_unit: 45000.0,
        formula: single_unit,
        min_quantity: 1.0,
    },
    WorkFormula {
        id: "equipment_installation",
        name: "Монтаж оборудования",
        section: INSTALLATION,
        unit: "комплект",
        price_per_unit: 35000.0,
        formula: single_unit,
        min_quantity: 1.0,
    },
    WorkFormula {
        id: "piping",
        name: "Обвязка трубами",
        section: INSTALLATION,
        unit: "м.п.",
        price_per_unit: 1200.0,
        formula: piping,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "tile_work",
        name: "Укладка плитки (борта)",
        section: FINISHING,
        unit: "м²",
        price_per_unit: 3000.0,
        formula: tile_work,
        min_quantity: 0.0,
    },
    WorkFormula {
        id: "deck_finishing",
        name: "Отделка террасы",
        section: FINISHING,
        unit: "м²",
        price_per_unit: 2500.0,
        formula: deck_finishing,
        min_quantity: 0.0,
    },
];

/// Pit volume before the soil-loosening factor.
fn pit_volume(d: &Dimensions) -> f64 {
    (d.length + 1.0) * (d.width + 1.0) * (d.depth + 0.3)
}

fn excavation(d: &Dimensions) -> f64 {
    pit_volume(d) * 1.3
}

fn backfill(d: &Dimensions) -> f64 {
    (pit_volume(d) - d.volume()) * 0.4
}

fn soil_removal(d: &Dimensions) -> f64 {
    pit_volume(d) * 0.6
}

fn concrete_pad(d: &Dimensions) -> f64 {
    (d.length + 0.4) * (d.width + 0.4) * 0.15
}

fn concrete_belt(d: &Dimensions) -> f64 {
    d.perimeter() + 4.0
}

fn single_unit(_: &Dimensions) -> f64 {
    1.0
}

fn piping(d: &Dimensions) -> f64 {
    d.perimeter() + 20.0
}

fn tile_work(d: &Dimensions) -> f64 {
    d.perimeter() * 0.5
}

fn deck_finishing(d: &Dimensions) -> f64 {
    d.floor_area() * 0.3
}
