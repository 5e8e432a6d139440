use thiserror_no_std::Error;

/// Represents errors in creating any of the physical unit types.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PhysicalError {
    /// The value was NaN or infinite.
    #[error("Value is not a finite number!")]
    NotFinite,

    /// The value was zero or negative. None of the quantities this generator
    /// works with have a meaningful zero.
    #[error("Value must be strictly positive, got {0}!")]
    NotPositive(f64),
}

/// Shared check for every unit constructor.
pub(crate) fn check_positive(value: f64) -> Result<f64, PhysicalError> {
    if !value.is_finite() {
        return Err(PhysicalError::NotFinite);
    }
    if value <= 0f64 {
        return Err(PhysicalError::NotPositive(value));
    }
    Ok(value)
}
