//! pf-exchanger: shell-and-tube bundle geometry.
//!
//! Tube-count estimation and bundle/shell diameter sizing from TEMA
//! constants. Pure closed forms and lookups; the same normalization
//! philosophy as the hydraulic path (SI in, SI out, tables injected).

pub mod bundle;
pub mod error;

pub use bundle::{BundleLayout, bundle_diameter, shell_diameter, shell_to_bundle, tube_count};
pub use error::{ExchangerError, ExchangerResult};
