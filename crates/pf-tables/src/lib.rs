//! pf-tables: versioned industry reference data behind lookup contracts.
//!
//! Pipe schedule dimensions (ASME B36.10M subset), material roughness,
//! fitting K-factors, service criteria limits, and TEMA tube-bundle
//! constants. Each table is an immutable struct built once at process
//! start and injected into the engine, so calculations stay testable
//! against synthetic tables. The engine only relies on the lookup
//! contract: key in, value out, defined miss behavior.

pub mod criteria;
pub mod error;
pub mod fittings;
pub mod roughness;
pub mod schedule;
pub mod tema;

pub use criteria::{CriteriaTable, ServiceKind, ServiceLimits, SizeBand, VelocityLimit};
pub use error::{TableError, TableResult};
pub use fittings::FittingTable;
pub use roughness::RoughnessTable;
pub use schedule::{PipeGeometry, PipeScheduleTable, nominal_inches};
pub use tema::{HeadType, TemaTable, TubePattern};
