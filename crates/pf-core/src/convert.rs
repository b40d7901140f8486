//! Quantity-kind unit normalization.
//!
//! Every calculator input arrives as a numeric value plus a selected unit
//! string; everything downstream runs in SI. This module is the single
//! source of truth for those conversions: one factor table per quantity
//! kind, `to_si`/`from_si` as exact inverses, and temperature handled as
//! an affine transform through a Kelvin pivot.
//!
//! Factors are NIST reference constants (exact where the unit is defined
//! exactly, e.g. 1 in = 0.0254 m). The tables are consulted by the engine
//! and exposed via [`supported_units`] so an external picker can restrict
//! its choices to what is actually registered.

use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    /// Pipe run length (canonical: m)
    Length,
    /// Diameters, roughness, pitch (canonical: m)
    LengthSmall,
    /// Cross-section / surface area (canonical: m^2)
    Area,
    /// Volumetric flow rate (canonical: m^3/s)
    FlowRate,
    /// Density (canonical: kg/m^3)
    Density,
    /// Dynamic viscosity (canonical: Pa s)
    Viscosity,
    /// Pressure (canonical: Pa)
    Pressure,
    /// Temperature (canonical: K, affine)
    Temperature,
    /// Velocity (canonical: m/s)
    Velocity,
    /// Power (canonical: W)
    Power,
    /// Specific heat capacity (canonical: J/(kg K))
    SpecificHeat,
    /// Thermal conductivity (canonical: W/(m K))
    ThermalConductivity,
    /// Fouling resistance (canonical: m^2 K/W)
    FoulingResistance,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "Length"),
            Self::LengthSmall => write!(f, "Small Length"),
            Self::Area => write!(f, "Area"),
            Self::FlowRate => write!(f, "Flow Rate"),
            Self::Density => write!(f, "Density"),
            Self::Viscosity => write!(f, "Viscosity"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Temperature => write!(f, "Temperature"),
            Self::Velocity => write!(f, "Velocity"),
            Self::Power => write!(f, "Power"),
            Self::SpecificHeat => write!(f, "Specific Heat"),
            Self::ThermalConductivity => write!(f, "Thermal Conductivity"),
            Self::FoulingResistance => write!(f, "Fouling Resistance"),
        }
    }
}

/// Error in unit conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unknown unit '{unit}' for {kind}")]
    UnknownUnit { unit: String, kind: QuantityKind },

    #[error("Non-finite value for {kind}: {value}")]
    NonFinite { kind: QuantityKind, value: f64 },
}

type UnitTable = &'static [(&'static str, f64)];

const LENGTH: UnitTable = &[
    ("m", 1.0),
    ("km", 1_000.0),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1_609.344),
];

const LENGTH_SMALL: UnitTable = &[
    ("m", 1.0),
    ("mm", 1e-3),
    ("cm", 1e-2),
    ("in", 0.0254),
];

const AREA: UnitTable = &[
    ("m2", 1.0),
    ("cm2", 1e-4),
    ("mm2", 1e-6),
    ("ft2", 0.092_903_04),
    ("in2", 6.451_6e-4),
];

const FLOW_RATE: UnitTable = &[
    ("m3/s", 1.0),
    ("m3/h", 1.0 / 3_600.0),
    ("l/s", 1e-3),
    ("l/min", 1e-3 / 60.0),
    ("gpm", 3.785_411_784e-3 / 60.0),
    ("bbl/d", 0.158_987_294_928 / 86_400.0),
    ("ft3/s", 0.028_316_846_592),
    ("ft3/h", 0.028_316_846_592 / 3_600.0),
];

const DENSITY: UnitTable = &[
    ("kg/m3", 1.0),
    ("g/cm3", 1_000.0),
    ("kg/l", 1_000.0),
    ("lb/ft3", 0.453_592_37 / 0.028_316_846_592),
];

const VISCOSITY: UnitTable = &[
    ("pa.s", 1.0),
    ("mpa.s", 1e-3),
    ("cp", 1e-3),
    ("p", 0.1),
    ("lb/ft.s", 0.453_592_37 / 0.3048),
];

const PRESSURE: UnitTable = &[
    ("pa", 1.0),
    ("kpa", 1e3),
    ("mpa", 1e6),
    ("bar", 1e5),
    ("mbar", 100.0),
    ("atm", 101_325.0),
    ("psi", 6_894.757_293_168_361),
    ("kg/cm2", 98_066.5),
    ("mmhg", 133.322_387_415),
    ("mmh2o", 9.806_65),
];

const VELOCITY: UnitTable = &[
    ("m/s", 1.0),
    ("km/h", 1.0 / 3.6),
    ("ft/s", 0.3048),
    ("ft/min", 0.3048 / 60.0),
];

const POWER: UnitTable = &[
    ("w", 1.0),
    ("kw", 1e3),
    ("mw", 1e6),
    ("hp", 745.699_871_582_270_2),
    ("btu/h", 1_055.055_852_62 / 3_600.0),
];

const SPECIFIC_HEAT: UnitTable = &[
    ("j/kg.k", 1.0),
    ("kj/kg.k", 1e3),
    ("kcal/kg.c", 4_186.8),
    ("btu/lb.f", 4_186.8),
];

const THERMAL_CONDUCTIVITY: UnitTable = &[
    ("w/m.k", 1.0),
    ("kcal/h.m.c", 1.163),
    ("btu/h.ft.f", 1.730_734_666_4),
];

const FOULING_RESISTANCE: UnitTable = &[
    ("m2.k/w", 1.0),
    ("h.ft2.f/btu", 0.176_110_183_682_301_9),
];

fn factor_table(kind: QuantityKind) -> UnitTable {
    match kind {
        QuantityKind::Length => LENGTH,
        QuantityKind::LengthSmall => LENGTH_SMALL,
        QuantityKind::Area => AREA,
        QuantityKind::FlowRate => FLOW_RATE,
        QuantityKind::Density => DENSITY,
        QuantityKind::Viscosity => VISCOSITY,
        QuantityKind::Pressure => PRESSURE,
        QuantityKind::Velocity => VELOCITY,
        QuantityKind::Power => POWER,
        QuantityKind::SpecificHeat => SPECIFIC_HEAT,
        QuantityKind::ThermalConductivity => THERMAL_CONDUCTIVITY,
        QuantityKind::FoulingResistance => FOULING_RESISTANCE,
        // Temperature is affine and never goes through a factor table.
        QuantityKind::Temperature => &[],
    }
}

fn lookup_factor(kind: QuantityKind, unit: &str) -> Result<f64, UnitError> {
    let wanted = unit.trim().to_ascii_lowercase();
    factor_table(kind)
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| UnitError::UnknownUnit {
            unit: unit.to_string(),
            kind,
        })
}

/// Convert temperature to Kelvin.
fn temperature_to_kelvin(value: f64, unit: &str) -> Result<f64, UnitError> {
    match unit.trim().to_ascii_lowercase().as_str() {
        "k" => Ok(value),
        "c" => Ok(value + 273.15),
        "f" => Ok((value + 459.67) * 5.0 / 9.0),
        _ => Err(UnitError::UnknownUnit {
            unit: unit.to_string(),
            kind: QuantityKind::Temperature,
        }),
    }
}

/// Convert temperature from Kelvin.
fn temperature_from_kelvin(value: f64, unit: &str) -> Result<f64, UnitError> {
    match unit.trim().to_ascii_lowercase().as_str() {
        "k" => Ok(value),
        "c" => Ok(value - 273.15),
        "f" => Ok(value * 9.0 / 5.0 - 459.67),
        _ => Err(UnitError::UnknownUnit {
            unit: unit.to_string(),
            kind: QuantityKind::Temperature,
        }),
    }
}

/// Convert `value` expressed in `unit` to the SI base unit for `kind`.
pub fn to_si(value: f64, kind: QuantityKind, unit: &str) -> Result<f64, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::NonFinite { kind, value });
    }
    match kind {
        QuantityKind::Temperature => temperature_to_kelvin(value, unit),
        _ => Ok(value * lookup_factor(kind, unit)?),
    }
}

/// Convert an SI `value` back to `unit`. Exact inverse of [`to_si`].
pub fn from_si(value: f64, kind: QuantityKind, unit: &str) -> Result<f64, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::NonFinite { kind, value });
    }
    match kind {
        QuantityKind::Temperature => temperature_from_kelvin(value, unit),
        _ => Ok(value / lookup_factor(kind, unit)?),
    }
}

/// All unit names registered for a quantity kind.
///
/// The UI layer uses this to populate its unit pickers; anything outside
/// this list is rejected by [`to_si`]/[`from_si`].
pub fn supported_units(kind: QuantityKind) -> Vec<&'static str> {
    match kind {
        QuantityKind::Temperature => vec!["k", "c", "f"],
        _ => factor_table(kind).iter().map(|(name, _)| *name).collect(),
    }
}

/// Every quantity kind the normalizer knows about.
pub const ALL_KINDS: [QuantityKind; 13] = [
    QuantityKind::Length,
    QuantityKind::LengthSmall,
    QuantityKind::Area,
    QuantityKind::FlowRate,
    QuantityKind::Density,
    QuantityKind::Viscosity,
    QuantityKind::Pressure,
    QuantityKind::Temperature,
    QuantityKind::Velocity,
    QuantityKind::Power,
    QuantityKind::SpecificHeat,
    QuantityKind::ThermalConductivity,
    QuantityKind::FoulingResistance,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_rate_m3h() {
        let q = to_si(100.0, QuantityKind::FlowRate, "m3/h").unwrap();
        assert!((q - 100.0 / 3600.0).abs() < 1e-15);
    }

    #[test]
    fn pressure_bar() {
        assert_eq!(to_si(1.0, QuantityKind::Pressure, "bar").unwrap(), 1e5);
        assert_eq!(from_si(1e5, QuantityKind::Pressure, "bar").unwrap(), 1.0);
    }

    #[test]
    fn viscosity_centipoise() {
        assert_eq!(to_si(1.0, QuantityKind::Viscosity, "cP").unwrap(), 1e-3);
    }

    #[test]
    fn temperature_celsius_pivot() {
        let k = to_si(20.0, QuantityKind::Temperature, "C").unwrap();
        assert!((k - 293.15).abs() < 1e-12);
        let c = from_si(293.15, QuantityKind::Temperature, "C").unwrap();
        assert!((c - 20.0).abs() < 1e-12);
    }

    #[test]
    fn temperature_fahrenheit_pivot() {
        let k = to_si(32.0, QuantityKind::Temperature, "F").unwrap();
        assert!((k - 273.15).abs() < 1e-12);
        let f = from_si(273.15, QuantityKind::Temperature, "F").unwrap();
        assert!((f - 32.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_unit_rejected() {
        let err = to_si(1.0, QuantityKind::Pressure, "furlong").unwrap_err();
        assert!(matches!(err, UnitError::UnknownUnit { .. }));
        assert!(err.to_string().contains("furlong"));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(to_si(f64::NAN, QuantityKind::Length, "m").is_err());
        assert!(from_si(f64::INFINITY, QuantityKind::Length, "m").is_err());
    }

    #[test]
    fn unit_names_are_unique_per_kind() {
        for kind in ALL_KINDS {
            let units = supported_units(kind);
            for (i, a) in units.iter().enumerate() {
                for b in &units[i + 1..] {
                    assert_ne!(a, b, "duplicate unit '{a}' for {kind}");
                }
            }
        }
    }

    #[test]
    fn every_kind_has_an_si_identity_unit() {
        for kind in ALL_KINDS {
            if kind == QuantityKind::Temperature {
                continue;
            }
            let has_identity = supported_units(kind)
                .iter()
                .any(|u| to_si(1.0, kind, u).unwrap() == 1.0);
            assert!(has_identity, "no SI base unit registered for {kind}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_all_units(x in 1e-6_f64..1e6_f64, idx in 0usize..64) {
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            for kind in ALL_KINDS {
                let units = supported_units(kind);
                let unit = units[idx % units.len()];
                let si = to_si(x, kind, unit).unwrap();
                let back = from_si(si, kind, unit).unwrap();
                prop_assert!(
                    nearly_equal(back, x, tol),
                    "round trip failed for {} '{}': {} -> {} -> {}",
                    kind, unit, x, si, back
                );
            }
        }
    }
}
