//! Pump power draw.

use pf_core::units::constants::G0_MPS2;
use pf_core::units::{Density, Power, VolumeRate};
use uom::si::power::watt;

use crate::error::{PumpError, PumpResult};

/// Ideal hydraulic power `P = rho g Q H`.
pub fn hydraulic_power(density: Density, flow: VolumeRate, head_m: f64) -> PumpResult<Power> {
    if density.value <= 0.0 || flow.value <= 0.0 {
        return Err(PumpError::InvalidArg {
            what: "non-positive density or flow",
        });
    }
    Ok(Power::new::<watt>(
        density.value * G0_MPS2 * flow.value * head_m,
    ))
}

/// Shaft power for a given pump efficiency (0 < eta <= 1).
pub fn brake_power(hydraulic: Power, efficiency: f64) -> PumpResult<Power> {
    if efficiency <= 0.0 || efficiency > 1.0 {
        return Err(PumpError::InvalidArg {
            what: "pump efficiency must be in (0,1]",
        });
    }
    Ok(Power::new::<watt>(hydraulic.value / efficiency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{kgpm3, m3ps};

    #[test]
    fn water_pump_power() {
        // 100 m3/h, 40 m head: ~10.9 kW hydraulic
        let hydraulic =
            hydraulic_power(kgpm3(1000.0), m3ps(100.0 / 3600.0), 40.0).unwrap();
        assert!((hydraulic.value - 10_896.0).abs() < 10.0);

        let brake = brake_power(hydraulic, 0.7).unwrap();
        assert!((brake.value - hydraulic.value / 0.7).abs() < 1e-9);
    }

    #[test]
    fn efficiency_bounds() {
        let hydraulic = hydraulic_power(kgpm3(1000.0), m3ps(0.01), 10.0).unwrap();
        assert!(brake_power(hydraulic, 0.0).is_err());
        assert!(brake_power(hydraulic, 1.5).is_err());
        assert!(brake_power(hydraulic, 1.0).is_ok());
    }
}
