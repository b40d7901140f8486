//! pf-core: stable foundation for pipeflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - convert (quantity-kind unit normalization to/from SI)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod convert;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use convert::{QuantityKind, UnitError, from_si, supported_units, to_si};
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
