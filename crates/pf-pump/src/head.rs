//! Total Dynamic Head composition.
//!
//! The suction and discharge sides are evaluated independently (two
//! flow-property passes); this module only composes their results. The
//! term list is fixed per calculation mode, not assembled from runtime
//! conditionals.

use pf_core::units::constants::G0_MPS2;
use pf_core::units::{Density, Length, Pressure};
use pf_flow::Breakdown;

use crate::error::{PumpError, PumpResult};

/// Labels used in the head breakdown (meters of fluid).
pub mod labels {
    pub const STATIC_HEAD: &str = "static-head";
    pub const FRICTION_LOSS: &str = "friction-loss";
    pub const PRESSURE_HEAD: &str = "pressure-head";
    pub const VELOCITY_HEAD: &str = "velocity-head";
    pub const GAUGE_ELEVATION: &str = "gauge-elevation";
}

/// Which head terms participate in TDH.
///
/// System sizing works from vessel conditions through the piping;
/// flange rating works from gauge readings at the pump flanges and so
/// carries no piping friction or static terms of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpMode {
    SystemSizing,
    FlangeRating,
}

/// One side (suction or discharge) of the pump, already evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideConditions {
    /// Vessel surface pressure (system sizing) or flange gauge reading
    /// (flange rating), absolute.
    pub pressure: Pressure,
    /// Liquid level (system sizing) or gauge centerline elevation
    /// (flange rating), relative to the pump centerline.
    pub elevation: Length,
    /// Piping friction loss on this side [m of fluid]; zero for flange
    /// rating.
    pub friction_head_m: f64,
    /// Line velocity at this side [m/s].
    pub velocity_mps: f64,
}

/// TDH as an additive breakdown in meters of fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadBreakdown {
    pub mode: PumpMode,
    pub breakdown: Breakdown,
    pub total_m: f64,
}

/// Compose Total Dynamic Head from two independently evaluated sides.
pub fn total_dynamic_head(
    mode: PumpMode,
    density: Density,
    suction: &SideConditions,
    discharge: &SideConditions,
) -> PumpResult<HeadBreakdown> {
    if density.value <= 0.0 {
        return Err(PumpError::InvalidArg {
            what: "non-positive density",
        });
    }

    let rho_g = density.value * G0_MPS2;
    let pressure_head = (discharge.pressure.value - suction.pressure.value) / rho_g;
    let velocity_head = (discharge.velocity_mps.powi(2) - suction.velocity_mps.powi(2))
        / (2.0 * G0_MPS2);

    let mut breakdown = Breakdown::new();
    match mode {
        PumpMode::SystemSizing => {
            breakdown.push(
                labels::STATIC_HEAD,
                discharge.elevation.value - suction.elevation.value,
            );
            breakdown.push(
                labels::FRICTION_LOSS,
                suction.friction_head_m + discharge.friction_head_m,
            );
            breakdown.push(labels::PRESSURE_HEAD, pressure_head);
            breakdown.push(labels::VELOCITY_HEAD, velocity_head);
        }
        PumpMode::FlangeRating => {
            breakdown.push(labels::PRESSURE_HEAD, pressure_head);
            breakdown.push(
                labels::GAUGE_ELEVATION,
                discharge.elevation.value - suction.elevation.value,
            );
            breakdown.push(labels::VELOCITY_HEAD, velocity_head);
        }
    }

    let total_m = breakdown.total();
    if !total_m.is_finite() {
        return Err(PumpError::InvalidArg {
            what: "non-finite head total",
        });
    }

    Ok(HeadBreakdown {
        mode,
        breakdown,
        total_m,
    })
}
