use std::collections::HashMap;

use craftbooks::manufacturing::{
    calculate_production_capacity, validate_production_run, IngredientRequirement,
    ProductionRunInput, StockRecord,
};
use craftbooks::units::{
    convert_unit, convert_water_volume_to_weight, find_unit, units_in_category, QuantityDisplay,
    UnitCategory,
};

/// The manufacture screen's full journey: populate the unit picker, resolve
/// the recipe's units, compute capacity, format the figures, gate the run.
#[test]
fn test_screen_journey_through_the_facade() {
    // Unit picker: weight units in catalog order, labelled for display
    let weight_units = units_in_category(UnitCategory::Weight);
    assert!(!weight_units.is_empty());
    assert_eq!(weight_units[0].display_label(), "Gram (g)");

    // Form input uses whatever the user typed; resolution is case-insensitive
    let kg = find_unit(" KG ").unwrap();
    assert_eq!(kg.primary_abbreviation(), "kg");
    assert_eq!(convert_unit(2.0, "Kilos", "g"), Some(2000.0));
    assert_eq!(convert_water_volume_to_weight(1.0, "L", "kg"), Some(1.0));

    // Soap batch: 400 g oil, 150 ml lye solution per bar
    let requirements = vec![
        IngredientRequirement {
            inventory_item_id: "oil".to_string(),
            quantity: 400.0,
            unit: Some("g".to_string()),
        },
        IngredientRequirement {
            inventory_item_id: "lye".to_string(),
            quantity: 150.0,
            unit: Some("ml".to_string()),
        },
    ];
    let stock = HashMap::from([
        (
            "oil".to_string(),
            StockRecord {
                name: Some("Olive Oil".to_string()),
                current_stock: Some(12.0),
                unit: Some("kg".to_string()),
                packaging_unit: None,
            },
        ),
        (
            "lye".to_string(),
            StockRecord {
                name: Some("Lye Solution".to_string()),
                current_stock: Some(3.0),
                unit: Some("l".to_string()),
                packaging_unit: None,
            },
        ),
    ]);

    let details = calculate_production_capacity(&requirements, &stock);

    // oil 12/0.4 = 30 bars, lye 3/0.15 = 20 bars -> lye limits
    assert_eq!(details.limiting_capacity, Some(20.0));
    let limiting: Vec<_> = details
        .steps
        .iter()
        .filter(|step| step.is_limiting)
        .map(|step| step.ingredient_name.as_str())
        .collect();
    assert_eq!(limiting, ["Lye Solution"]);

    // 400 g + 150 ml bridged to 150 g = 550 g per bar
    assert_eq!(details.common_unit, "g");
    assert_eq!(details.total_ingredient_quantities, 550.0);
    assert_eq!(details.max_production_capacity, Some(11_000.0));

    // Capacity figure rendered for the screen upgrades to kilograms
    let grams = find_unit(&details.common_unit);
    assert_eq!(grams.format(details.max_production_capacity.unwrap()), "11 kg");

    // Waste gate: 10% waste leaves 9900; a run of 9900 is refused
    let input = ProductionRunInput { quantity: 9900.0, waste_percent: 10.0 };
    assert!(validate_production_run(&details, &input).is_err());
    let input = ProductionRunInput { quantity: 9899.0, waste_percent: 10.0 };
    assert_eq!(validate_production_run(&details, &input).unwrap(), 9900.0);
}
