pub mod capacity;
pub mod error;
pub mod types;
pub mod validate;

pub use capacity::calculate_production_capacity;
pub use error::{ManufacturingError, ManufacturingResult};
pub use types::{
    CalculationDetails, CalculationStep, IngredientQuantity, IngredientRequirement, StockRecord,
};
pub use validate::{effective_max_capacity, validate_production_run, ProductionRunInput};
