//! Error types for hydraulic calculations.

use thiserror::Error;

/// Errors that can occur while computing flow properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Invalid flow input: {what}")]
    InvalidFlow { what: &'static str },

    #[error("Non-finite intermediate for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type FlowResult<T> = Result<T, FlowError>;

/// Ensure a value is finite, converting NaN/inf into a typed error
/// before it can reach a result object.
pub fn check_finite(value: f64, what: &'static str) -> FlowResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FlowError::NonFinite { what, value })
    }
}
