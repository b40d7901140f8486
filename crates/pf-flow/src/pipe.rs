//! Pipe segment description.

use pf_core::units::{Area, Length, m2};

use crate::error::{FlowError, FlowResult};

/// A straight pipe run with resolved geometry.
///
/// The nominal/schedule labels are carried for reporting and criteria
/// band selection; the math only uses the resolved inside diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSpec {
    pub nominal: String,
    pub schedule: String,
    pub inside_diameter: Length,
    pub roughness: Length,
    pub length: Length,
}

impl PipeSpec {
    pub fn check(&self) -> FlowResult<()> {
        if self.inside_diameter.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive inside diameter",
            });
        }
        if self.roughness.value < 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "negative roughness",
            });
        }
        if self.length.value < 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "negative pipe length",
            });
        }
        Ok(())
    }

    /// Flow cross-section `pi D^2 / 4`.
    pub fn area(&self) -> Area {
        let d = self.inside_diameter.value;
        m2(std::f64::consts::PI * d * d / 4.0)
    }

    /// Roughness relative to diameter.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness.value / self.inside_diameter.value
    }
}
