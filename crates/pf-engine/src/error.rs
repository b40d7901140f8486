//! Engine-level error aggregation.

use pf_core::convert::UnitError;
use pf_exchanger::ExchangerError;
use pf_flow::FlowError;
use pf_pump::PumpError;
use pf_tables::TableError;
use thiserror::Error;

/// One collected input problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// Input-level failures, collected rather than short-circuited so
    /// the caller can report every problem at once.
    #[error("Invalid input: {}", format_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("Unknown {what} key '{key}'")]
    UnknownKey { what: &'static str, key: String },

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Pump(#[from] PumpError),

    #[error(transparent)]
    Exchanger(#[from] ExchangerError),
}

pub type EngineResult<T> = Result<T, EngineError>;

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}
