pub mod catalog;
pub mod convert;
pub mod display;
mod types;

pub use catalog::{find_unit, unit_category, units_in_category, UNIT_CATALOG};
pub use convert::{convert_unit, convert_water_volume_to_weight};
pub use display::QuantityDisplay;
pub use types::{UnitCategory, UnitDefinition, UnitSystem};
