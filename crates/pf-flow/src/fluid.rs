//! Fluid state as supplied by the unit normalizer.

use pf_core::units::constants::R_UNIVERSAL;
use pf_core::units::{Density, DynVisc, Pressure, Temperature, Velocity, mps};

use crate::error::{FlowError, FlowResult};

/// Fluid properties in SI, immutable for the duration of a calculation.
///
/// Vapor pressure matters only on the pump suction side; compressibility,
/// molar mass, and specific heat ratio only for the gas path (sonic
/// velocity / Mach).
#[derive(Debug, Clone, PartialEq)]
pub struct FluidSpec {
    pub density: Density,
    pub viscosity: DynVisc,
    pub temperature: Temperature,
    pub vapor_pressure: Option<Pressure>,
    /// Compressibility factor Z (gas only, defaults to 1 where needed)
    pub z: Option<f64>,
    /// Molar mass [kg/kmol] (gas only)
    pub molar_mass: Option<f64>,
    /// Specific heat ratio Cp/Cv (gas only)
    pub specific_heat_ratio: Option<f64>,
}

impl FluidSpec {
    /// Liquid constructor: no gas-only fields.
    pub fn liquid(density: Density, viscosity: DynVisc, temperature: Temperature) -> Self {
        Self {
            density,
            viscosity,
            temperature,
            vapor_pressure: None,
            z: None,
            molar_mass: None,
            specific_heat_ratio: None,
        }
    }

    pub fn check(&self) -> FlowResult<()> {
        if self.density.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive density",
            });
        }
        if self.viscosity.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive viscosity",
            });
        }
        if self.temperature.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive absolute temperature",
            });
        }
        if let Some(z) = self.z {
            if z <= 0.0 {
                return Err(FlowError::InvalidFlow {
                    what: "non-positive compressibility factor",
                });
            }
        }
        Ok(())
    }

    /// Sonic velocity `sqrt(k Z R T / M)`, if the gas fields are present.
    ///
    /// Z defaults to 1 (ideal gas) when not supplied.
    pub fn sonic_velocity(&self) -> Option<Velocity> {
        let k = self.specific_heat_ratio?;
        let molar_mass_kg_per_mol = self.molar_mass? / 1000.0;
        if k <= 0.0 || molar_mass_kg_per_mol <= 0.0 {
            return None;
        }
        let z = self.z.unwrap_or(1.0);
        let c2 = k * z * R_UNIVERSAL * self.temperature.value / molar_mass_kg_per_mol;
        if c2 <= 0.0 {
            return None;
        }
        Some(mps(c2.sqrt()))
    }
}
