use serde::{Deserialize, Serialize};

/// One line of a product's recipe: how much of an inventory item each
/// produced unit consumes. Supplied by the product screen.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientRequirement {
    pub inventory_item_id: String,
    pub quantity: f64,
    pub unit: Option<String>,
}

/// Current inventory state for one item, as returned by the stock lookup.
/// Every field may be missing; the calculator degrades per ingredient
/// instead of failing the whole computation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockRecord {
    pub name: Option<String>,
    pub current_stock: Option<f64>,
    pub unit: Option<String>,
    /// Unit the item is purchased/stored in, used when an ingredient line
    /// carries no unit of its own
    pub packaging_unit: Option<String>,
}

/// Per-ingredient capacity row, one per ingredient with a usable stock
/// record and a positive requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationStep {
    pub ingredient_name: String,
    pub stock: f64,
    pub stock_unit: String,
    /// Requirement converted into the stock unit
    pub quantity: f64,
    pub quantity_unit: String,
    /// stock / quantity
    pub capacity: f64,
    pub is_limiting: bool,
}

/// Original requirement quantity plus its conversion into the common unit.
/// Emitted in input order for every ingredient, including those that could
/// not form a [`CalculationStep`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientQuantity {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    /// `None` when no conversion path into the common unit exists
    pub converted_quantity: Option<f64>,
}

/// Full result of a production-capacity calculation, rendered by the
/// manufacture screen. Optional fields stay `None` when the inputs are
/// insufficient; the calculator never fails outright.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationDetails {
    pub steps: Vec<CalculationStep>,
    /// Minimum capacity across steps, `None` when no step was computable
    pub limiting_capacity: Option<f64>,
    pub common_unit: String,
    pub total_ingredient_quantities: f64,
    /// limiting_capacity * total_ingredient_quantities
    pub max_production_capacity: Option<f64>,
    pub ingredient_quantities: Vec<IngredientQuantity>,
}
