use serde::Deserialize;
use validator::Validate;

use crate::error::{ManufacturingError, ManufacturingResult};
use crate::types::CalculationDetails;

/// User-proposed production run, as posted by the manufacture form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductionRunInput {
    #[validate(range(exclusive_min = 0.0, message = "Production quantity must be greater than zero"))]
    pub quantity: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Waste percentage must be between 0 and 100"))]
    pub waste_percent: f64,
}

/// Capacity left after reserving a waste allowance.
pub fn effective_max_capacity(max_production_capacity: f64, waste_percent: f64) -> f64 {
    max_production_capacity * (1.0 - waste_percent / 100.0)
}

/// Gate a proposed production run against the calculated capacity.
///
/// The proposed quantity must be strictly less than the waste-adjusted
/// maximum. Returns the effective maximum so the screen can show it in the
/// accept path as well.
///
/// # Errors
/// * [`ManufacturingError::ValidationError`] - quantity or waste out of range
/// * [`ManufacturingError::CapacityUnknown`] - capacity could not be
///   calculated; the screen shows "unable to calculate", never a false zero
/// * [`ManufacturingError::ExceedsCapacity`] - quantity >= effective maximum
pub fn validate_production_run(
    details: &CalculationDetails,
    input: &ProductionRunInput,
) -> ManufacturingResult<f64> {
    input
        .validate()
        .map_err(|e| ManufacturingError::ValidationError(e.to_string()))?;

    let max_production_capacity = details
        .max_production_capacity
        .ok_or(ManufacturingError::CapacityUnknown)?;

    let effective_max = effective_max_capacity(max_production_capacity, input.waste_percent);
    if input.quantity >= effective_max {
        return Err(ManufacturingError::ExceedsCapacity {
            requested: input.quantity,
            effective_max,
            waste_percent: input.waste_percent,
        });
    }

    Ok(effective_max)
}
