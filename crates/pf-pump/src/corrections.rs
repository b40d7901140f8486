//! Optional pump-performance corrections.
//!
//! Reciprocating acceleration head and the HI viscous performance
//! correction are layered over the base head/NPSH results as decorator
//! functions. Neither participates in the generic integration path.

use pf_core::units::constants::G0_MPS2;
use pf_core::units::{Length, Velocity};

use crate::error::{PumpError, PumpResult};

/// Reciprocating pump configuration for the HI acceleration-head factor C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReciprocatingKind {
    Simplex,
    Duplex,
    Triplex,
    Quintuplex,
    Septuplex,
    Nonuplex,
}

impl ReciprocatingKind {
    pub fn c_factor(&self) -> f64 {
        match self {
            Self::Simplex => 0.400,
            Self::Duplex => 0.200,
            Self::Triplex => 0.066,
            Self::Quintuplex => 0.040,
            Self::Septuplex => 0.028,
            Self::Nonuplex => 0.022,
        }
    }
}

/// HI fluid elasticity factor K for the acceleration-head formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidElasticity {
    DeaeratedWater,
    Water,
    Hydrocarbon,
    CompressibleHydrocarbon,
}

impl FluidElasticity {
    pub fn k_factor(&self) -> f64 {
        match self {
            Self::DeaeratedWater => 1.4,
            Self::Water => 1.5,
            Self::Hydrocarbon => 2.0,
            Self::CompressibleHydrocarbon => 2.5,
        }
    }
}

/// Acceleration head `h_acc = L v N C / (K g)` for reciprocating pumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelerationHead {
    pub suction_line_length: Length,
    pub line_velocity: Velocity,
    pub pump_speed_rpm: f64,
    pub kind: ReciprocatingKind,
    pub elasticity: FluidElasticity,
}

impl AccelerationHead {
    /// The additional head [m] the suction system must supply.
    pub fn head_m(&self) -> PumpResult<f64> {
        if self.pump_speed_rpm <= 0.0 {
            return Err(PumpError::InvalidArg {
                what: "non-positive pump speed",
            });
        }
        if self.suction_line_length.value < 0.0 {
            return Err(PumpError::InvalidArg {
                what: "negative suction line length",
            });
        }
        Ok(self.suction_line_length.value
            * self.line_velocity.value
            * self.pump_speed_rpm
            * self.kind.c_factor()
            / (self.elasticity.k_factor() * G0_MPS2))
    }

    /// Decorate a base NPSHa with the acceleration-head debit.
    pub fn apply_to_npsha(&self, npsha_m: f64) -> PumpResult<f64> {
        Ok(npsha_m - self.head_m()?)
    }
}

/// HI 9.6.7 viscous performance correction factors.
///
/// Derived from the parameter
/// `B = 16.5 nu^0.5 H^0.0625 / (Q^0.375 N^0.25)`
/// with nu in cSt, H in m, Q in m3/h, N in rpm. For B <= 1 the water
/// performance stands uncorrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViscosityCorrection {
    pub b: f64,
    /// Flow correction C_Q
    pub cq: f64,
    /// Head correction C_H (at the best-efficiency flow)
    pub ch: f64,
    /// Efficiency correction C_eta
    pub ceta: f64,
}

impl ViscosityCorrection {
    pub fn new(
        flow_m3h: f64,
        head_m: f64,
        speed_rpm: f64,
        kinematic_viscosity_cst: f64,
    ) -> PumpResult<Self> {
        if flow_m3h <= 0.0 || head_m <= 0.0 || speed_rpm <= 0.0 {
            return Err(PumpError::InvalidArg {
                what: "non-positive viscous-correction input",
            });
        }
        if kinematic_viscosity_cst <= 0.0 {
            return Err(PumpError::InvalidArg {
                what: "non-positive kinematic viscosity",
            });
        }

        let b = 16.5 * kinematic_viscosity_cst.sqrt() * head_m.powf(0.0625)
            / (flow_m3h.powf(0.375) * speed_rpm.powf(0.25));

        if b <= 1.0 {
            return Ok(Self {
                b,
                cq: 1.0,
                ch: 1.0,
                ceta: 1.0,
            });
        }

        let log_b = b.log10();
        let cq = 2.71_f64.powf(-0.165 * log_b.powf(3.15));
        let ceta = b.powf(-0.0547 * b.powf(0.69));
        Ok(Self {
            b,
            cq,
            ch: cq,
            ceta,
        })
    }

    pub fn corrected_flow_m3h(&self, water_flow_m3h: f64) -> f64 {
        self.cq * water_flow_m3h
    }

    pub fn corrected_head_m(&self, water_head_m: f64) -> f64 {
        self.ch * water_head_m
    }

    pub fn corrected_efficiency(&self, water_efficiency: f64) -> f64 {
        self.ceta * water_efficiency
    }
}
