use std::collections::HashMap;

use craftbooks_units::{convert_unit, convert_water_volume_to_weight, unit_category, UnitCategory};

use crate::types::{
    CalculationDetails, CalculationStep, IngredientQuantity, IngredientRequirement, StockRecord,
};

/// Relative tolerance for flagging capacities tied at the minimum, so equal
/// ratios reached through different unit conversions still tie
const CAPACITY_TIE_TOLERANCE: f64 = 1e-9;

/// Last resort when neither the ingredient nor its stock record names a unit
const FALLBACK_UNIT: &str = "pcs";

/// Compute how many units of a product can be made from current stock.
///
/// Pure and synchronous: no I/O, inputs are never mutated, and every
/// "cannot determine" outcome is a `None` field rather than an error, so a
/// single bad ingredient row never aborts the whole calculation.
///
/// Two steps, matching the manufacture screen's own explanation:
/// 1. Per ingredient, capacity = stock / requirement (requirement converted
///    into the stock unit); the minimum is the limiting capacity and ties
///    are all flagged limiting.
/// 2. All requirement quantities are summed in a common unit (weight wins
///    over volume, water volumes bridge to grams) and the maximum producible
///    quantity is limiting capacity x that total.
///
/// # Arguments
/// * `requirements` - The product's ingredient lines, in display order
/// * `stock` - Stock lookup results keyed by inventory item id
pub fn calculate_production_capacity(
    requirements: &[IngredientRequirement],
    stock: &HashMap<String, StockRecord>,
) -> CalculationDetails {
    let mut steps: Vec<CalculationStep> = Vec::new();

    for requirement in requirements {
        let record = stock.get(&requirement.inventory_item_id);
        let Some(current_stock) = record.and_then(|r| r.current_stock) else {
            tracing::debug!(
                item = %requirement.inventory_item_id,
                "no stock figure, ingredient excluded from capacity"
            );
            continue;
        };
        if requirement.quantity <= 0.0 {
            tracing::debug!(
                item = %requirement.inventory_item_id,
                quantity = requirement.quantity,
                "non-positive requirement, ingredient excluded from capacity"
            );
            continue;
        }

        let requirement_unit = effective_requirement_unit(requirement, record);
        let stock_unit = effective_stock_unit(record);

        let quantity_in_stock_unit = if units_match(&requirement_unit, &stock_unit) {
            Some(requirement.quantity)
        } else {
            convert_unit(requirement.quantity, &requirement_unit, &stock_unit)
        };
        let Some(quantity_in_stock_unit) = quantity_in_stock_unit else {
            tracing::debug!(
                item = %requirement.inventory_item_id,
                from = %requirement_unit,
                to = %stock_unit,
                "requirement not convertible into stock unit, ingredient excluded from capacity"
            );
            continue;
        };

        steps.push(CalculationStep {
            ingredient_name: ingredient_name(requirement, record),
            stock: current_stock,
            stock_unit: stock_unit.clone(),
            quantity: quantity_in_stock_unit,
            quantity_unit: stock_unit,
            capacity: current_stock / quantity_in_stock_unit,
            is_limiting: false,
        });
    }

    let limiting_capacity = steps.iter().map(|step| step.capacity).reduce(f64::min);
    if let Some(minimum) = limiting_capacity {
        for step in &mut steps {
            step.is_limiting =
                (step.capacity - minimum).abs() <= CAPACITY_TIE_TOLERANCE * minimum.abs().max(1.0);
        }
    }

    let common_unit = choose_common_unit(requirements, stock);

    let mut total_ingredient_quantities = 0.0;
    let mut ingredient_quantities = Vec::with_capacity(requirements.len());
    for requirement in requirements {
        let record = stock.get(&requirement.inventory_item_id);
        let unit = effective_requirement_unit(requirement, record);

        let converted_quantity = if requirement.quantity > 0.0 {
            convert_to_common(requirement.quantity, &unit, &common_unit)
        } else {
            // Non-positive quantities carry no signal and must never shrink
            // the total
            None
        };

        match converted_quantity {
            Some(converted) => total_ingredient_quantities += converted,
            None if requirement.quantity > 0.0 => {
                // No conversion path: an approximate aggregate beats a
                // failed one, so the raw quantity goes into the sum
                tracing::debug!(
                    item = %requirement.inventory_item_id,
                    unit = %unit,
                    common_unit = %common_unit,
                    "summing unconverted quantity"
                );
                total_ingredient_quantities += requirement.quantity;
            }
            None => {}
        }

        ingredient_quantities.push(IngredientQuantity {
            ingredient_name: ingredient_name(requirement, record),
            quantity: requirement.quantity,
            unit,
            converted_quantity,
        });
    }

    let max_production_capacity =
        limiting_capacity.map(|capacity| capacity * total_ingredient_quantities);

    CalculationDetails {
        steps,
        limiting_capacity,
        common_unit,
        total_ingredient_quantities,
        max_production_capacity,
        ingredient_quantities,
    }
}

/// Common unit precedence: any weight ingredient (including mixed
/// weight/volume sets) -> grams, else any volume -> millilitres, else the
/// first ingredient's own unit verbatim.
fn choose_common_unit(
    requirements: &[IngredientRequirement],
    stock: &HashMap<String, StockRecord>,
) -> String {
    let categories = requirements.iter().map(|requirement| {
        let record = stock.get(&requirement.inventory_item_id);
        let unit = effective_requirement_unit(requirement, record);
        // Unknown tokens fall back to count
        unit_category(&unit).unwrap_or_default()
    });

    let mut has_weight = false;
    let mut has_volume = false;
    for category in categories {
        has_weight |= category == UnitCategory::Weight;
        has_volume |= category == UnitCategory::Volume;
    }

    if has_weight {
        "g".to_string()
    } else if has_volume {
        "ml".to_string()
    } else {
        requirements
            .first()
            .map(|requirement| {
                effective_requirement_unit(requirement, stock.get(&requirement.inventory_item_id))
            })
            .unwrap_or_else(|| FALLBACK_UNIT.to_string())
    }
}

/// Same-category conversion into the common unit, or the water bridge when a
/// volume must join a weight total. `None` when no path exists.
fn convert_to_common(value: f64, unit: &str, common_unit: &str) -> Option<f64> {
    if units_match(unit, common_unit) {
        return Some(value);
    }
    convert_unit(value, unit, common_unit)
        .or_else(|| convert_water_volume_to_weight(value, unit, common_unit))
}

/// Three-step fallback, order fixed: ingredient unit -> stock packaging
/// unit -> count.
fn effective_requirement_unit(
    requirement: &IngredientRequirement,
    record: Option<&StockRecord>,
) -> String {
    requirement
        .unit
        .clone()
        .or_else(|| record.and_then(|r| r.packaging_unit.clone()))
        .unwrap_or_else(|| FALLBACK_UNIT.to_string())
}

fn effective_stock_unit(record: Option<&StockRecord>) -> String {
    record
        .and_then(|r| r.unit.clone().or_else(|| r.packaging_unit.clone()))
        .unwrap_or_else(|| FALLBACK_UNIT.to_string())
}

fn ingredient_name(requirement: &IngredientRequirement, record: Option<&StockRecord>) -> String {
    record
        .and_then(|r| r.name.clone())
        .unwrap_or_else(|| requirement.inventory_item_id.clone())
}

fn units_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
