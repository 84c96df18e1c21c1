use pool_estimator::engine::{EngineConfig, EstimateEngine, RoundingStrategy};
use pool_estimator::model::{
    section, CalculatedBy, CalculationContext, Category, Dimensions, EquipmentRef, EquipmentSlot,
    EstimateItem, Selection, WorkSelection, WorksSelection,
};
use pool_estimator::tables::{Region, Season, WORK_FORMULAS};
use pretty_assertions::assert_eq;

fn full_selection() -> Selection {
    let mut skimmer = EquipmentRef::named("Скиммер Kripsol", 6_500.0);
    skimmer.kind = Some("skimmer".to_string());
    skimmer.installation_price = Some(2_000.0);
    let mut nozzle = EquipmentRef::named("Форсунка", 850.0);
    nozzle.kind = Some("nozzle".to_string());
    let mut lamp = EquipmentRef::named("Прожектор LED", 12_000.0);
    lamp.quantity = Some(2.0);
    lamp.installation_price = Some(1_500.0);

    Selection {
        bowl: Some(serde_json::from_str(r#"{"id": "luxor", "name": "Luxor", "price": 390000}"#).unwrap()),
        filtration: Some(EquipmentSlot::single(EquipmentRef::named("Hayward 14 m³/h", 95_000.0))),
        parts: Some(EquipmentSlot::composite(vec![skimmer, nozzle])),
        heating: Some(EquipmentSlot::single(EquipmentRef::named("Теплообменник", 48_000.0))),
        additional: vec![lamp],
        works: Some(WorksSelection::List(vec![WorkSelection {
            id: Some("fence".to_string()),
            name: Some("Ограждение".to_string()),
            total: 30_000.0,
            quantity: None,
            unit: None,
        }])),
        ..Selection::default()
    }
}

#[test]
fn scenario_a_default_pool_empty_selection() {
    let result = EstimateEngine::default().calculate(&CalculationContext::default());

    assert_eq!(result.volume, 48.0);
    assert_eq!(result.surface_area, 68.0);
    assert_eq!(result.items.len(), WORK_FORMULAS.len());
    assert!(result.items.iter().all(|i| i.category == Category::Works && i.quantity > 0.0));
    assert_eq!(result.breakdown.equipment, 0.0);
    assert_eq!(result.breakdown.additional, 0.0);
    assert_eq!(result.subtotal, result.breakdown.works);
    assert_eq!(result.subtotal, 684_730.0);
    assert_eq!(result.discount, 0.0);
    assert_eq!(result.discount_percent, 0.0);
    assert_eq!(result.total, 684_730.0);
}

#[test]
fn scenario_b_first_discount_tier_is_inclusive() {
    let ctx = CalculationContext::new(Selection::default(), Dimensions::new(10.0, 5.0, 1.0));
    let result = EstimateEngine::default().calculate(&ctx);
    assert_eq!(result.volume, 50.0);
    assert_eq!(result.discount_percent, 3.0);
    assert_eq!(result.discount, (result.subtotal * 3.0 / 100.0).round());
}

#[test]
fn scenario_c_moscow_summer_work() {
    let selection = Selection {
        works: Some(WorksSelection::List(vec![WorkSelection {
            id: Some("custom".to_string()),
            name: Some("Работа".to_string()),
            total: 1000.0,
            quantity: Some(1.0),
            unit: None,
        }])),
        ..Selection::default()
    };
    let ctx = CalculationContext::new(selection, Dimensions::default())
        .with_region(Region::Moscow)
        .with_season(Season::Summer);
    let result = EstimateEngine::default().calculate(&ctx);
    let work = result.item("work_custom").unwrap();

    assert_eq!(work.applied_coefficient, 1.38);
    assert_eq!(work.total, 1380.0);
    assert_eq!(work.calculated_by, CalculatedBy::Manual);
}

#[test]
fn scenario_d_tax_on_undiscounted_subtotal() {
    let engine = EstimateEngine::new(EngineConfig {
        tax_rate: 20.0,
        ..EngineConfig::default()
    });
    let pump = EstimateItem::new(
        "pump",
        "Насос",
        section::EQUIPMENT,
        Category::Filtration,
        "шт",
        CalculatedBy::Catalog,
    )
    .priced(250.0, 4.0);
    // 4.8 m³ is below every discount tier
    let result = engine.assemble(&CalculationContext::default(), vec![pump], 4.8, 16.4);

    assert_eq!(result.subtotal, 1000.0);
    assert_eq!(result.discount, 0.0);
    assert_eq!(result.tax, 200.0);
    assert_eq!(result.total, 1200.0);
}

#[test]
fn tax_through_the_full_pipeline() {
    let engine = EstimateEngine::new(EngineConfig {
        tax_rate: 20.0,
        ..EngineConfig::default()
    });
    let result = engine.calculate(&CalculationContext::default());

    assert_eq!(result.subtotal, 684_730.0);
    assert_eq!(result.discount, 0.0);
    assert_eq!(result.tax, 136_946.0);
    assert_eq!(result.total, 821_676.0);
}

#[test]
fn kopeck_precision_rounds_half_up() {
    let engine = EstimateEngine::new(EngineConfig {
        money_decimals: 2,
        tax_rate: 10.0,
        ..EngineConfig::default()
    });
    let nozzle = EstimateItem::new(
        "nozzle",
        "Форсунка",
        section::EQUIPMENT,
        Category::Parts,
        "шт",
        CalculatedBy::Catalog,
    )
    .priced(0.335, 3.0);
    let result = engine.assemble(&CalculationContext::default(), vec![nozzle], 4.8, 16.4);

    // 1.005 → 1.01, tax 0.101 → 0.10
    assert_eq!(result.subtotal, 1.01);
    assert_eq!(result.tax, 0.1);
    assert_eq!(result.total, 1.11);
}

#[test]
fn floor_rounds_the_exact_line_total() {
    let engine = EstimateEngine::new(EngineConfig {
        rounding_strategy: RoundingStrategy::Floor,
        ..EngineConfig::default()
    });
    let mut nozzle = EquipmentRef::named("Форсунка", 333.333);
    nozzle.quantity = Some(3.0);
    let selection = Selection {
        additional: vec![nozzle],
        ..Selection::default()
    };
    let result = engine.calculate(&CalculationContext::new(selection, Dimensions::default()));
    assert_eq!(result.item("additional-0").unwrap().total, 999.0);
}

#[test]
fn scenario_e_skimmer_count_ignores_stated_quantity() {
    let mut skimmer = EquipmentRef::named("Скиммер", 5_000.0);
    skimmer.kind = Some("skimmer".to_string());
    skimmer.quantity = Some(10.0);
    let selection = Selection {
        parts: Some(EquipmentSlot::composite(vec![skimmer])),
        ..Selection::default()
    };
    let ctx = CalculationContext::new(selection, Dimensions::new(10.0, 6.0, 1.0));
    let result = EstimateEngine::default().calculate(&ctx);

    assert_eq!(result.volume, 60.0);
    let part = result.item("part_0").unwrap();
    assert_eq!(part.quantity, 3.0);
    assert_eq!(part.total, 15_000.0);
}

#[test]
fn breakdown_conservation_and_total_identity() {
    let contexts = [
        CalculationContext::default(),
        CalculationContext::new(full_selection(), Dimensions::new(12.0, 6.0, 1.8))
            .with_region(Region::Spb)
            .with_season(Season::Fall),
        CalculationContext::new(full_selection(), Dimensions::new(25.0, 10.0, 2.0))
            .with_region(Region::Moscow)
            .with_season(Season::Winter),
    ];
    for strategy in [
        RoundingStrategy::Round,
        RoundingStrategy::Floor,
        RoundingStrategy::Ceil,
    ] {
        let engine = EstimateEngine::new(EngineConfig {
            tax_rate: 20.0,
            rounding_strategy: strategy,
            ..EngineConfig::default()
        });
        for ctx in &contexts {
            let result = engine.calculate(ctx);
            let item_sum: f64 = result.items.iter().map(|i| i.total).sum();
            assert_eq!(result.breakdown.sum(), item_sum);
            assert_eq!(result.subtotal, engine.round(result.breakdown.sum(), 0));
            assert_eq!(
                result.total,
                engine.round(result.subtotal - result.discount + result.tax, 0)
            );
            assert!(result.subtotal >= 0.0 && result.discount >= 0.0);
            assert!(result.tax >= 0.0 && result.total >= 0.0);
        }
    }
}

#[test]
fn full_selection_item_layout() {
    let ctx = CalculationContext::new(full_selection(), Dimensions::new(10.0, 5.0, 1.5));
    let result = EstimateEngine::default().calculate(&ctx);

    // 75 m³: 3 skimmers, 11 nozzles
    assert_eq!(result.volume, 75.0);
    assert_eq!(result.item("part_0").unwrap().quantity, 3.0);
    assert_eq!(result.item("part_1").unwrap().quantity, 11.0);
    assert_eq!(result.item("inst_part_0").unwrap().total, 6_000.0);
    assert_eq!(result.item("inst_add_0").unwrap().total, 3_000.0);
    assert_eq!(result.item("work_fence").unwrap().section, section::CONSTRUCTION);

    assert_eq!(result.items[0].id, "bowl-luxor");
    assert_eq!(result.items[1].category, Category::Filtration);
    assert_eq!(
        result.breakdown.equipment,
        390_000.0 + 95_000.0 + 19_500.0 + 9_350.0 + 48_000.0
    );
    assert_eq!(result.breakdown.additional, 24_000.0);
    assert_eq!(result.discount_percent, 3.0);
}

#[test]
fn seasonal_coefficient_can_be_switched_off() {
    let ctx = CalculationContext::default().with_season(Season::Summer);
    let on = EstimateEngine::default().calculate(&ctx);
    let off = EstimateEngine::new(EngineConfig {
        apply_seasonal_coefficients: false,
        ..EngineConfig::default()
    })
    .calculate(&ctx);

    assert!(on.items.iter().all(|i| (i.applied_coefficient - 1.15).abs() < 1e-12));
    assert!(off.items.iter().all(|i| i.applied_coefficient == 1.0));
    assert!(on.total > off.total);
}

#[test]
fn unusable_dimensions_fall_back_to_defaults() {
    let ctx = CalculationContext::new(Selection::default(), Dimensions::new(0.0, -4.0, f64::NAN));
    let engine = EstimateEngine::default();
    assert_eq!(
        engine.calculate(&ctx),
        engine.calculate(&CalculationContext::default())
    );
}

#[test]
fn malformed_composite_is_rejected() {
    let parsed = pool_estimator::input::parse_context(
        r#"{"selection": {"parts": {"items": [
            {"type": "skimmer", "price": 5000, "quantity": "2"},
            {"type": "nozzle", "price": 900}
        ]}}}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn json_payload_from_the_form() {
    let ctx = pool_estimator::input::parse_context(
        r#"{
            "selection": {
                "material": {"id": "polypropylene", "name": "PP 8 мм", "basePricePerCubicMeter": 18000},
                "parts": {"items": [{"type": "nozzle", "model": "Emaux", "unitPrice": 700, "installationPrice": 300}]},
                "heating": {"items": [{"name": "Pahlen", "price": 52000, "quantity": 1}]},
                "works": {"drain": {"name": "Дренаж", "total": 15000, "quantity": 5, "unit": "м.п."}}
            },
            "dimensions": {"length": 7, "width": 3, "depth": 1.5},
            "region": "regions"
        }"#,
    )
    .unwrap();
    let result = EstimateEngine::default().calculate(&ctx);

    let shell = result.item("bowl_poly_weld").unwrap();
    assert_eq!((shell.quantity, shell.price), (31.5, 18_000.0));
    assert_eq!(result.breakdown.materials, 567_000.0);
    // 31.5 / 7 = 4.5 → 5 nozzles
    assert_eq!(result.item("part_0").unwrap().quantity, 5.0);
    assert_eq!(result.item("inst_part_0").unwrap().total, 1_500.0);
    assert_eq!(result.item("heat_0").unwrap().total, 52_000.0);
    assert_eq!(result.item("work_drain").unwrap().price, 3_000.0);
}
