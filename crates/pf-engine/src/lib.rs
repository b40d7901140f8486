//! pf-engine: calculation orchestration.
//!
//! Ties the unit normalizer, reference tables, hydraulics, pump
//! composition, and criteria evaluation into the three user-facing
//! calculations: line sizing, pump sizing, and tube-bundle geometry.
//! Inputs arrive as flat serde structures (numeric value + unit string
//! per field, reference-table keys); the output is a single immutable
//! result object, or a typed error. Any validation failure yields an
//! error with the full issue list, never a partially populated result.

pub mod bundle;
pub mod error;
pub mod input;
pub mod line;
pub mod pump;
mod resolve;
pub mod result;
pub mod tables;
mod validate;

pub use bundle::calculate_bundle;
pub use error::{EngineError, EngineResult, ValidationIssue};
pub use input::{
    BundleInput, FittingCount, FluidInput, LineKind, LineSizingInput, Measurement, PipeInput,
    PumpModeInput, PumpSide, PumpSizingInput, ReciprocatingInput, ViscousInput,
};
pub use line::calculate_line;
pub use pump::calculate_pump;
pub use result::{
    BreakdownPart, BreakdownSnapshot, BundleResult, CriterionSnapshot, FlowSnapshot,
    FrictionSnapshot, LineCalculationResult, NpshSnapshot, PumpCalculationResult, SideSnapshot,
    ViscousSnapshot,
};
pub use tables::ReferenceTables;
