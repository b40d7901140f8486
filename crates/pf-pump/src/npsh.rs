//! Net Positive Suction Head available.

use pf_core::units::constants::G0_MPS2;
use pf_core::units::{Density, Pressure};

use crate::error::{PumpError, PumpResult};

/// Suction-side energy balance inputs, SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpshInput {
    /// Absolute pressure at the suction source surface.
    pub suction_pressure: Pressure,
    /// Fluid vapor pressure at pumping temperature.
    pub vapor_pressure: Pressure,
    pub density: Density,
    /// Liquid level above (+) or below (-) pump centerline [m].
    pub static_head_m: f64,
    /// Suction piping friction loss [m of fluid].
    pub friction_head_m: f64,
    /// Suction line velocity [m/s]; only used when the velocity head is
    /// included.
    pub velocity_mps: f64,
    /// Whether to credit the suction velocity head. Most sizing
    /// practice leaves it out; rating from flange readings adds it.
    pub include_velocity_head: bool,
}

/// `NPSHa = (Ps - Pv)/(rho g) + Z - hf [+ v^2/2g]`
pub fn npsh_available(input: &NpshInput) -> PumpResult<f64> {
    if input.density.value <= 0.0 {
        return Err(PumpError::InvalidArg {
            what: "non-positive density",
        });
    }
    if input.vapor_pressure.value < 0.0 {
        return Err(PumpError::InvalidArg {
            what: "negative vapor pressure",
        });
    }

    let rho_g = input.density.value * G0_MPS2;
    let pressure_margin = (input.suction_pressure.value - input.vapor_pressure.value) / rho_g;
    let mut npsha = pressure_margin + input.static_head_m - input.friction_head_m;
    if input.include_velocity_head {
        npsha += input.velocity_mps.powi(2) / (2.0 * G0_MPS2);
    }

    if !npsha.is_finite() {
        return Err(PumpError::InvalidArg {
            what: "non-finite NPSHa",
        });
    }
    Ok(npsha)
}

/// NPSHa / NPSHr ratio; infinite when no requirement is given.
pub fn npsh_margin(npsha_m: f64, npshr_m: Option<f64>) -> f64 {
    match npshr_m {
        Some(required) if required > 0.0 => npsha_m / required,
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{kgpm3, pa};

    #[test]
    fn water_at_atmospheric_reference_case() {
        // Water at 20 C: Pv = 2340 Pa, 3 m submergence, 0.5 m friction
        let input = NpshInput {
            suction_pressure: pa(101_325.0),
            vapor_pressure: pa(2_340.0),
            density: kgpm3(1000.0),
            static_head_m: 3.0,
            friction_head_m: 0.5,
            velocity_mps: 0.0,
            include_velocity_head: false,
        };
        let npsha = npsh_available(&input).unwrap();
        assert!((npsha - 12.59).abs() < 0.01, "NPSHa = {npsha}");
    }

    #[test]
    fn velocity_head_adds_when_included() {
        let base = NpshInput {
            suction_pressure: pa(101_325.0),
            vapor_pressure: pa(2_340.0),
            density: kgpm3(1000.0),
            static_head_m: 3.0,
            friction_head_m: 0.5,
            velocity_mps: 2.0,
            include_velocity_head: false,
        };
        let without = npsh_available(&base).unwrap();
        let with = npsh_available(&NpshInput {
            include_velocity_head: true,
            ..base
        })
        .unwrap();
        assert!((with - without - 4.0 / (2.0 * G0_MPS2)).abs() < 1e-12);
    }

    #[test]
    fn lift_reduces_npsha() {
        let input = NpshInput {
            suction_pressure: pa(101_325.0),
            vapor_pressure: pa(2_340.0),
            density: kgpm3(1000.0),
            static_head_m: -3.0,
            friction_head_m: 0.5,
            velocity_mps: 0.0,
            include_velocity_head: false,
        };
        let npsha = npsh_available(&input).unwrap();
        assert!((npsha - 6.59).abs() < 0.01);
    }

    #[test]
    fn margin_handling() {
        assert!((npsh_margin(12.0, Some(4.0)) - 3.0).abs() < 1e-12);
        assert!(npsh_margin(12.0, None).is_infinite());
        assert!(npsh_margin(12.0, Some(0.0)).is_infinite());
    }
}
