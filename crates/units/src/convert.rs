use crate::catalog::find_unit;
use crate::types::UnitCategory;

/// Convert a quantity between two units of the same category.
///
/// Returns `None` when either token is unresolvable or the categories differ.
/// Cross-category conversion is unsupported here; the single sanctioned
/// exception is [`convert_water_volume_to_weight`]. No rounding is applied,
/// display formatting is the caller's job.
///
/// # Arguments
/// * `value` - Quantity expressed in `from`
/// * `from` - Source unit token (abbreviation or alias)
/// * `to` - Target unit token
pub fn convert_unit(value: f64, from: &str, to: &str) -> Option<f64> {
    let from_unit = find_unit(from)?;
    let to_unit = find_unit(to)?;

    if from_unit.category != to_unit.category {
        return None;
    }

    Some(value * from_unit.base_value / to_unit.base_value)
}

/// Convert a water volume to a weight, the only permitted category bridge.
///
/// Valid only volume -> weight: the value goes to millilitres, 1 ml of water
/// is taken as 1 g, and the grams are scaled to the target weight unit.
/// Returns `None` when either token fails to resolve or the categories are
/// not volume -> weight.
pub fn convert_water_volume_to_weight(value: f64, from: &str, to: &str) -> Option<f64> {
    let from_unit = find_unit(from)?;
    let to_unit = find_unit(to)?;

    if from_unit.category != UnitCategory::Volume || to_unit.category != UnitCategory::Weight {
        return None;
    }

    let millilitres = value * from_unit.base_value;
    Some(millilitres / to_unit.base_value)
}
