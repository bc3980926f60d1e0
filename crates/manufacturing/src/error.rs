use thiserror::Error;

pub type ManufacturingResult<T> = Result<T, ManufacturingError>;

#[derive(Error, Debug)]
pub enum ManufacturingError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Production capacity could not be determined - check ingredient stock levels and units")]
    CapacityUnknown,

    #[error("Production quantity {requested} must be less than {effective_max} to allow for {waste_percent}% waste")]
    ExceedsCapacity {
        requested: f64,
        effective_max: f64,
        waste_percent: f64,
    },
}
