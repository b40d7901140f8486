//! Flat input structures supplied by the excluded UI layer.
//!
//! The engine never parses free text: each field is a numeric value
//! plus a selected unit string, or a reference-table key. Everything
//! derives Deserialize so the calling layer can hand over YAML/JSON
//! directly.

use pf_core::convert::{QuantityKind, UnitError, to_si};
use serde::Deserialize;

/// A numeric value with its selected unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    /// Normalize to the SI base unit of the quantity kind.
    pub fn si(&self, kind: QuantityKind) -> Result<f64, UnitError> {
        to_si(self.value, kind, &self.unit)
    }
}

/// Line phase selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Liquid,
    Gas,
    MixedPhase,
}

/// Fluid fields; gas-only entries may be omitted for liquids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FluidInput {
    pub density: Measurement,
    pub viscosity: Measurement,
    pub temperature: Measurement,
    #[serde(default)]
    pub vapor_pressure: Option<Measurement>,
    /// Compressibility factor Z
    #[serde(default)]
    pub compressibility: Option<f64>,
    /// Molar mass [kg/kmol]
    #[serde(default)]
    pub molar_mass: Option<f64>,
    /// Cp/Cv
    #[serde(default)]
    pub specific_heat_ratio: Option<f64>,
}

/// Pipe selection: table keys plus run length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipeInput {
    pub nominal: String,
    pub schedule: String,
    pub material: String,
    pub length: Measurement,
    /// Used when (nominal, schedule) misses the schedule table; the
    /// resolver never falls back to zero on its own.
    #[serde(default)]
    pub fallback_diameter: Option<Measurement>,
}

/// Fitting key plus how many are installed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FittingCount {
    pub fitting: String,
    pub count: u32,
}

/// Line-sizing calculation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineSizingInput {
    pub line_type: LineKind,
    pub fluid: FluidInput,
    pub pipe: PipeInput,
    pub flow: Measurement,
    #[serde(default)]
    pub fittings: Vec<FittingCount>,
    #[serde(default)]
    pub elevation_change: Option<Measurement>,
    /// Service criteria key ("liquid-process", "gas-process", ...)
    pub service: String,
    /// Turbulent-branch model: "swamee-jain" (default) or "colebrook".
    #[serde(default)]
    pub friction_model: Option<String>,
}

/// TDH strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PumpModeInput {
    SystemSizing,
    FlangeRating,
}

/// One side of a pump sizing request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PumpSide {
    /// Vessel surface pressure (system sizing) or flange gauge reading
    /// (flange rating), absolute.
    pub pressure: Measurement,
    /// Liquid level / gauge elevation relative to pump centerline.
    pub elevation: Measurement,
    pub pipe: PipeInput,
    #[serde(default)]
    pub fittings: Vec<FittingCount>,
}

/// Reciprocating-pump acceleration head parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReciprocatingInput {
    /// "simplex", "duplex", "triplex", "quintuplex", "septuplex", "nonuplex"
    pub kind: String,
    pub speed_rpm: f64,
    /// "deaerated-water", "water", "hydrocarbon", "compressible-hydrocarbon"
    pub elasticity: String,
}

/// HI viscous performance correction parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViscousInput {
    pub kinematic_viscosity_cst: f64,
    pub speed_rpm: f64,
}

/// Pump sizing calculation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PumpSizingInput {
    pub mode: PumpModeInput,
    pub fluid: FluidInput,
    pub flow: Measurement,
    pub suction: PumpSide,
    pub discharge: PumpSide,
    #[serde(default)]
    pub npsh_required: Option<Measurement>,
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub include_suction_velocity_head: bool,
    #[serde(default)]
    pub reciprocating: Option<ReciprocatingInput>,
    #[serde(default)]
    pub viscous: Option<ViscousInput>,
    #[serde(default)]
    pub friction_model: Option<String>,
}

/// Tube-bundle geometry request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BundleInput {
    pub shell_inside: Measurement,
    pub tube_od: Measurement,
    pub pitch: Measurement,
    /// "triangular-30", "rotated-triangular-60", "square-90", "rotated-square-45"
    pub pattern: String,
    pub passes: u32,
    /// "fixed-tubesheet", "u-tube", "split-ring-floating", "pull-through-floating"
    pub head: String,
}
