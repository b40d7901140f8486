//! Error types for reference-table lookups.

use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

/// A lookup key had no entry in the backing table.
///
/// Geometry misses must be handled by the caller with an explicit
/// fallback diameter; the resolver never substitutes zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("No pipe geometry for nominal size '{nominal}' schedule '{schedule}'")]
    UnknownGeometry { nominal: String, schedule: String },

    #[error("Unknown pipe material '{material}'")]
    UnknownMaterial { material: String },

    #[error("Unknown fitting '{fitting}'")]
    UnknownFitting { fitting: String },

    #[error("No criteria limits for service '{service}'")]
    UnknownService { service: String },

    #[error("No tube-count constants for {pattern} pitch with {passes} passes")]
    UnknownBundleLayout { pattern: String, passes: u32 },
}
