//! Error types for pump calculations.

use pf_flow::FlowError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PumpError {
    #[error("Invalid pump input: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Flow(#[from] FlowError),
}

pub type PumpResult<T> = Result<T, PumpError>;
