use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Weight,
    Volume,
    /// Discrete items; also the fallback for unrecognized unit tokens
    #[default]
    Count,
    Kitchen,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    ImperialUk,
    ImperialUs,
}

/// One recognized measurement unit.
///
/// Static and immutable: the full set lives in [`crate::catalog::UNIT_CATALOG`]
/// and is never mutated after process start. `base_value` expresses one of
/// this unit in the category's reference unit (g for weight, ml for volume,
/// pcs for count, tsp for kitchen) and is always positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    pub name: &'static str,
    /// Accepted abbreviations; the first is the primary/display form
    pub abbreviations: &'static [&'static str],
    pub category: UnitCategory,
    /// Informational only; does not affect conversion math
    pub system: UnitSystem,
    pub base_value: f64,
    /// Extra match strings, including common misspellings
    pub aliases: &'static [&'static str],
}

impl UnitDefinition {
    pub fn primary_abbreviation(&self) -> &'static str {
        self.abbreviations[0]
    }

    /// Display form for unit pickers: "Kilogram (kg)"
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.primary_abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_unit;

    #[test]
    fn test_category_parses_from_snake_case() {
        assert_eq!("weight".parse::<UnitCategory>().unwrap(), UnitCategory::Weight);
        assert_eq!("kitchen".parse::<UnitCategory>().unwrap(), UnitCategory::Kitchen);
        assert_eq!(UnitCategory::Volume.to_string(), "volume");
    }

    #[test]
    fn test_category_default_is_count() {
        assert_eq!(UnitCategory::default(), UnitCategory::Count);
    }

    #[test]
    fn test_display_label() {
        let kg = find_unit("kg").unwrap();
        assert_eq!(kg.display_label(), "Kilogram (kg)");
    }

    #[test]
    fn test_unit_definition_serializes_for_ui() {
        let kg = find_unit("kg").unwrap();
        let json = serde_json::to_value(kg).unwrap();
        assert_eq!(json["name"], "Kilogram");
        assert_eq!(json["category"], "weight");
        assert_eq!(json["system"], "metric");
        assert_eq!(json["base_value"], 1000.0);
    }
}
