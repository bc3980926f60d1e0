use crate::types::UnitDefinition;

/// Render a quantity with its unit for list rows and capacity summaries.
pub trait QuantityDisplay {
    fn format(&self, value: f64) -> String;
}

impl QuantityDisplay for Option<&UnitDefinition> {
    fn format(&self, value: f64) -> String {
        match self {
            Some(unit) => match unit.primary_abbreviation() {
                // Large metric readings read better in the bigger unit
                "g" if value >= 1000.0 => format!("{} kg", trim_number(value / 1000.0)),
                "ml" if value >= 1000.0 => format!("{} L", trim_number(value / 1000.0)),
                abbreviation => format!("{} {}", trim_number(value), abbreviation),
            },
            None => trim_number(value),
        }
    }
}

/// Two decimal places at most, no trailing zeros
fn trim_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
