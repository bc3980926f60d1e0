use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::{UnitCategory, UnitDefinition, UnitSystem};

/// Static table of every unit the product recognizes.
///
/// Declaration order is meaningful: [`units_in_category`] preserves it for
/// unit pickers, and the first unit of each category is its reference unit
/// (`base_value == 1.0`).
pub static UNIT_CATALOG: &[UnitDefinition] = &[
    // Weight, base unit gram
    UnitDefinition {
        name: "Gram",
        abbreviations: &["g", "gram", "grams"],
        category: UnitCategory::Weight,
        system: UnitSystem::Metric,
        base_value: 1.0,
        aliases: &["gm", "gms", "gramme", "grammes"],
    },
    UnitDefinition {
        name: "Kilogram",
        abbreviations: &["kg", "kilogram", "kilograms"],
        category: UnitCategory::Weight,
        system: UnitSystem::Metric,
        base_value: 1000.0,
        aliases: &["kgs", "kilo", "kilos"],
    },
    UnitDefinition {
        name: "Milligram",
        abbreviations: &["mg", "milligram", "milligrams"],
        category: UnitCategory::Weight,
        system: UnitSystem::Metric,
        base_value: 0.001,
        aliases: &["mgs"],
    },
    UnitDefinition {
        name: "Tonne",
        abbreviations: &["t", "tonne", "tonnes"],
        category: UnitCategory::Weight,
        system: UnitSystem::Metric,
        base_value: 1_000_000.0,
        aliases: &["metric ton"],
    },
    UnitDefinition {
        name: "Ounce",
        abbreviations: &["oz", "ounce", "ounces"],
        category: UnitCategory::Weight,
        system: UnitSystem::ImperialUk,
        base_value: 28.349523125,
        aliases: &["ozs"],
    },
    UnitDefinition {
        name: "Pound",
        abbreviations: &["lb", "pound", "pounds"],
        category: UnitCategory::Weight,
        system: UnitSystem::ImperialUk,
        base_value: 453.59237,
        aliases: &["lbs"],
    },
    UnitDefinition {
        name: "Stone",
        abbreviations: &["st", "stone"],
        category: UnitCategory::Weight,
        system: UnitSystem::ImperialUk,
        base_value: 6350.29318,
        aliases: &["stones"],
    },
    // Volume, base unit millilitre
    UnitDefinition {
        name: "Millilitre",
        abbreviations: &["ml", "millilitre", "milliliter"],
        category: UnitCategory::Volume,
        system: UnitSystem::Metric,
        base_value: 1.0,
        aliases: &["mls", "millilitres", "milliliters"],
    },
    UnitDefinition {
        name: "Centilitre",
        abbreviations: &["cl", "centilitre", "centiliter"],
        category: UnitCategory::Volume,
        system: UnitSystem::Metric,
        base_value: 10.0,
        aliases: &["centilitres", "centiliters"],
    },
    UnitDefinition {
        name: "Litre",
        abbreviations: &["l", "litre", "liter"],
        category: UnitCategory::Volume,
        system: UnitSystem::Metric,
        base_value: 1000.0,
        aliases: &["ltr", "litres", "liters"],
    },
    UnitDefinition {
        name: "Fluid Ounce",
        abbreviations: &["fl oz", "fluid ounce"],
        category: UnitCategory::Volume,
        system: UnitSystem::ImperialUk,
        base_value: 28.4130625,
        aliases: &["floz", "fl. oz", "fluid ounces"],
    },
    UnitDefinition {
        name: "Pint",
        abbreviations: &["pt", "pint", "pints"],
        category: UnitCategory::Volume,
        system: UnitSystem::ImperialUk,
        base_value: 568.26125,
        aliases: &[],
    },
    UnitDefinition {
        name: "Quart",
        abbreviations: &["qt", "quart", "quarts"],
        category: UnitCategory::Volume,
        system: UnitSystem::ImperialUk,
        base_value: 1136.5225,
        aliases: &[],
    },
    UnitDefinition {
        name: "Gallon",
        abbreviations: &["gal", "gallon", "gallons"],
        category: UnitCategory::Volume,
        system: UnitSystem::ImperialUk,
        base_value: 4546.09,
        aliases: &["gals"],
    },
    UnitDefinition {
        name: "Cup",
        abbreviations: &["cup", "cups"],
        category: UnitCategory::Volume,
        system: UnitSystem::ImperialUs,
        base_value: 240.0,
        aliases: &["c"],
    },
    // Count, base unit piece
    UnitDefinition {
        name: "Piece",
        abbreviations: &["pcs", "piece", "pieces"],
        category: UnitCategory::Count,
        system: UnitSystem::Metric,
        base_value: 1.0,
        aliases: &["pc", "ea", "each", "unit", "units", "item", "items", "x"],
    },
    UnitDefinition {
        name: "Pair",
        abbreviations: &["pr", "pair", "pairs"],
        category: UnitCategory::Count,
        system: UnitSystem::Metric,
        base_value: 2.0,
        aliases: &[],
    },
    UnitDefinition {
        name: "Dozen",
        abbreviations: &["dz", "dozen"],
        category: UnitCategory::Count,
        system: UnitSystem::Metric,
        base_value: 12.0,
        aliases: &["doz", "dzn"],
    },
    UnitDefinition {
        name: "Gross",
        abbreviations: &["gross"],
        category: UnitCategory::Count,
        system: UnitSystem::Metric,
        base_value: 144.0,
        aliases: &[],
    },
    // Kitchen, base unit teaspoon
    UnitDefinition {
        name: "Teaspoon",
        abbreviations: &["tsp", "teaspoon", "teaspoons"],
        category: UnitCategory::Kitchen,
        system: UnitSystem::Metric,
        base_value: 1.0,
        aliases: &["tspn", "tsps"],
    },
    UnitDefinition {
        name: "Tablespoon",
        abbreviations: &["tbsp", "tablespoon", "tablespoons"],
        category: UnitCategory::Kitchen,
        system: UnitSystem::Metric,
        base_value: 3.0,
        aliases: &["tbs", "tblsp", "tbsps"],
    },
    UnitDefinition {
        name: "Pinch",
        abbreviations: &["pinch", "pinches"],
        category: UnitCategory::Kitchen,
        system: UnitSystem::Metric,
        base_value: 0.0625,
        aliases: &[],
    },
    UnitDefinition {
        name: "Dash",
        abbreviations: &["dash", "dashes"],
        category: UnitCategory::Kitchen,
        system: UnitSystem::Metric,
        base_value: 0.125,
        aliases: &[],
    },
    UnitDefinition {
        name: "Drop",
        abbreviations: &["drop", "drops"],
        category: UnitCategory::Kitchen,
        system: UnitSystem::Metric,
        base_value: 0.0125,
        aliases: &[],
    },
];

/// Case-folded token -> catalog index. First declaration wins on any
/// duplicate token, so catalog order settles ambiguity.
static ALIAS_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for (i, unit) in UNIT_CATALOG.iter().enumerate() {
        for token in unit.abbreviations.iter().chain(unit.aliases.iter()) {
            index.entry(*token).or_insert(i);
        }
    }
    index
});

/// Find a unit definition by any of its abbreviations or aliases.
///
/// Matching is exact-token after trimming and lowercasing, never substring or
/// fuzzy. An unknown token is a legitimate outcome, not an error: callers
/// handle `None`, typically by falling back to the count category.
pub fn find_unit(token: &str) -> Option<&'static UnitDefinition> {
    let normalized = token.trim().to_lowercase();
    ALIAS_INDEX
        .get(normalized.as_str())
        .map(|&i| &UNIT_CATALOG[i])
}

/// Category of the unit a token resolves to, or `None` if unrecognized.
pub fn unit_category(token: &str) -> Option<UnitCategory> {
    find_unit(token).map(|unit| unit.category)
}

/// All units of one category, in catalog declaration order.
pub fn units_in_category(category: UnitCategory) -> Vec<&'static UnitDefinition> {
    UNIT_CATALOG
        .iter()
        .filter(|unit| unit.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_primary_abbreviation_resolves_to_its_unit() {
        for unit in UNIT_CATALOG {
            let found = find_unit(unit.primary_abbreviation()).unwrap();
            assert_eq!(found, unit, "primary token of {}", unit.name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let lower = find_unit("kg").unwrap();
        assert_eq!(find_unit("KG").unwrap(), lower);
        assert_eq!(find_unit("  Kg ").unwrap(), lower);
    }

    #[test]
    fn test_aliases_and_misspellings_resolve() {
        assert_eq!(find_unit("kilos").unwrap().name, "Kilogram");
        assert_eq!(find_unit("grammes").unwrap().name, "Gram");
        assert_eq!(find_unit("Litres").unwrap().name, "Litre");
        assert_eq!(find_unit("each").unwrap().name, "Piece");
    }

    #[test]
    fn test_unknown_token_is_none_not_error() {
        assert!(find_unit("parsec").is_none());
        assert!(find_unit("").is_none());
        assert!(unit_category("parsec").is_none());
    }

    #[test]
    fn test_no_substring_matching() {
        // "kgx" contains "kg" but is not a recognized token
        assert!(find_unit("kgx").is_none());
        assert!(find_unit("1 kg").is_none());
    }

    #[test]
    fn test_unit_category_delegates_to_lookup() {
        assert_eq!(unit_category("lbs"), Some(UnitCategory::Weight));
        assert_eq!(unit_category("pint"), Some(UnitCategory::Volume));
        assert_eq!(unit_category("dozen"), Some(UnitCategory::Count));
        assert_eq!(unit_category("tbsp"), Some(UnitCategory::Kitchen));
    }

    #[test]
    fn test_units_in_category_preserves_declaration_order() {
        let weights = units_in_category(UnitCategory::Weight);
        let names: Vec<_> = weights.iter().map(|unit| unit.name).collect();
        assert_eq!(
            names,
            ["Gram", "Kilogram", "Milligram", "Tonne", "Ounce", "Pound", "Stone"]
        );
    }

    #[test]
    fn test_each_category_has_exactly_one_reference_unit() {
        for category in [
            UnitCategory::Weight,
            UnitCategory::Volume,
            UnitCategory::Count,
            UnitCategory::Kitchen,
        ] {
            let references = units_in_category(category)
                .into_iter()
                .filter(|unit| unit.base_value == 1.0)
                .count();
            assert_eq!(references, 1, "category {category}");
        }
    }

    #[test]
    fn test_all_base_values_positive() {
        for unit in UNIT_CATALOG {
            assert!(unit.base_value > 0.0, "{}", unit.name);
        }
    }

    #[test]
    fn test_no_duplicate_tokens_across_units() {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for unit in UNIT_CATALOG {
            for token in unit.abbreviations.iter().chain(unit.aliases.iter()) {
                let prev = seen.insert(token.to_lowercase(), unit.name);
                assert!(prev.is_none(), "token '{}' declared twice", token);
            }
        }
    }
}
