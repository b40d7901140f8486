//! Error types for bundle geometry.

use pf_tables::TableError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangerError {
    #[error("Invalid bundle input: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Table(#[from] TableError),
}

pub type ExchangerResult<T> = Result<T, ExchangerError>;
