//! Service criteria limit tables.
//!
//! Limits are optional per criterion: `None` means "no limit defined"
//! for that service, which the evaluator reports as NotApplicable rather
//! than a silent pass. Liquid velocity limits are piecewise by nominal
//! pipe size band; band selection is by inclusive upper bound with the
//! smallest matching band winning.

use std::fmt;

use crate::error::{TableError, TableResult};

/// Line service selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    LiquidProcess,
    PumpSuction,
    GasProcess,
    MixedPhase,
}

impl ServiceKind {
    /// Parse the key the input layer supplies.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "liquid-process" => Some(Self::LiquidProcess),
            "pump-suction" => Some(Self::PumpSuction),
            "gas-process" => Some(Self::GasProcess),
            "mixed-phase" => Some(Self::MixedPhase),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::LiquidProcess => "liquid-process",
            Self::PumpSuction => "pump-suction",
            Self::GasProcess => "gas-process",
            Self::MixedPhase => "mixed-phase",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One nominal-size band of a piecewise velocity limit.
///
/// A band applies to sizes up to and including `max_inches`. The last
/// band uses `f64::INFINITY` as its bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBand {
    pub name: &'static str,
    pub max_inches: f64,
    pub limit_mps: f64,
}

/// Velocity limit shape: a single number, or piecewise by size band.
#[derive(Debug, Clone, PartialEq)]
pub enum VelocityLimit {
    Uniform(f64),
    Banded(Vec<SizeBand>),
}

impl VelocityLimit {
    /// Limit applicable to a nominal size, if one is defined.
    ///
    /// Bands are scanned in ascending bound order; the smallest band
    /// whose inclusive upper bound covers the size wins.
    pub fn for_size(&self, inches: f64) -> Option<f64> {
        match self {
            Self::Uniform(limit) => Some(*limit),
            Self::Banded(bands) => bands
                .iter()
                .find(|band| inches <= band.max_inches)
                .map(|band| band.limit_mps),
        }
    }

    /// Band name applicable to a nominal size, for display.
    pub fn band_name(&self, inches: f64) -> Option<&'static str> {
        match self {
            Self::Uniform(_) => None,
            Self::Banded(bands) => bands
                .iter()
                .find(|band| inches <= band.max_inches)
                .map(|band| band.name),
        }
    }
}

/// Limits defined for one service. Absent limit = no limit defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLimits {
    pub service: ServiceKind,
    pub velocity: Option<VelocityLimit>,
    /// Momentum limit rho*v^2 [Pa]
    pub rho_v2_pa: Option<f64>,
    /// Mach number limit
    pub mach: Option<f64>,
    /// Pressure gradient limit [kPa/km]
    pub dp_kpa_per_km: Option<f64>,
    /// API RP 14E erosional C-factor, SI form: Ve = C / sqrt(rho) [m/s]
    pub erosional_c: Option<f64>,
}

fn liquid_bands(limits: [f64; 5]) -> VelocityLimit {
    VelocityLimit::Banded(vec![
        SizeBand {
            name: "size2",
            max_inches: 2.0,
            limit_mps: limits[0],
        },
        SizeBand {
            name: "size3to6",
            max_inches: 6.0,
            limit_mps: limits[1],
        },
        SizeBand {
            name: "size8to12",
            max_inches: 12.0,
            limit_mps: limits[2],
        },
        SizeBand {
            name: "size14to18",
            max_inches: 18.0,
            limit_mps: limits[3],
        },
        SizeBand {
            name: "size20plus",
            max_inches: f64::INFINITY,
            limit_mps: limits[4],
        },
    ])
}

/// Service -> limits lookup.
#[derive(Debug, Clone)]
pub struct CriteriaTable {
    entries: Vec<ServiceLimits>,
}

impl CriteriaTable {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ServiceLimits {
                    service: ServiceKind::LiquidProcess,
                    velocity: Some(liquid_bands([1.5, 2.1, 2.7, 3.4, 4.0])),
                    rho_v2_pa: None,
                    mach: None,
                    dp_kpa_per_km: Some(230.0),
                    erosional_c: None,
                },
                ServiceLimits {
                    service: ServiceKind::PumpSuction,
                    velocity: Some(liquid_bands([0.9, 1.2, 1.5, 1.8, 2.1])),
                    rho_v2_pa: None,
                    mach: None,
                    dp_kpa_per_km: Some(45.0),
                    erosional_c: None,
                },
                ServiceLimits {
                    service: ServiceKind::GasProcess,
                    velocity: Some(VelocityLimit::Uniform(18.3)),
                    rho_v2_pa: None,
                    mach: Some(0.3),
                    dp_kpa_per_km: Some(70.0),
                    erosional_c: Some(122.0),
                },
                ServiceLimits {
                    service: ServiceKind::MixedPhase,
                    velocity: None,
                    rho_v2_pa: Some(8_000.0),
                    mach: None,
                    dp_kpa_per_km: None,
                    erosional_c: Some(122.0),
                },
            ],
        }
    }

    /// Build a table from caller-supplied limits (synthetic tables in tests).
    pub fn from_entries(entries: Vec<ServiceLimits>) -> Self {
        Self { entries }
    }

    pub fn resolve(&self, service: ServiceKind) -> TableResult<&ServiceLimits> {
        self.entries
            .iter()
            .find(|e| e.service == service)
            .ok_or_else(|| TableError::UnknownService {
                service: service.to_string(),
            })
    }
}
