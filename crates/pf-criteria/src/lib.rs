//! pf-criteria: pass/fail evaluation against service limit tables.
//!
//! Compares computed hydraulic quantities (velocity, momentum, Mach,
//! pressure gradient) against the limits defined for a service and
//! emits one check per criterion plus human-readable warnings for
//! exceedances. An absent limit is reported as NotApplicable, never as
//! a silent pass. Exceedances are warnings attached to the result; they
//! do not abort the calculation.

use std::fmt;

use pf_tables::{ServiceLimits, VelocityLimit};

/// Outcome of one criterion comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    /// No limit defined for this service, or the quantity was not
    /// measurable from the supplied inputs.
    NotApplicable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
            Self::NotApplicable => write!(f, "NotApplicable"),
        }
    }
}

/// One evaluated criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionCheck {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub measured: Option<f64>,
    pub limit: Option<f64>,
    pub verdict: Verdict,
}

/// Quantities measured by the engine for criteria comparison.
///
/// Fields the calculation could not produce stay `None` (e.g. Mach for
/// a liquid) and evaluate to NotApplicable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasuredValues {
    pub velocity_mps: Option<f64>,
    pub rho_v2_pa: Option<f64>,
    pub mach: Option<f64>,
    pub dp_kpa_per_km: Option<f64>,
    /// Flowing density, used to derive the erosional velocity limit.
    pub density_kg_m3: Option<f64>,
}

/// Evaluation output: one check per criterion, warnings for failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub checks: Vec<CriterionCheck>,
    pub warnings: Vec<String>,
}

/// Evaluate all criteria defined for a service.
///
/// `nominal_inches` drives size-band selection for banded velocity
/// limits; when it is unknown a banded limit cannot be resolved and the
/// velocity check comes back NotApplicable.
pub fn evaluate(
    limits: &ServiceLimits,
    nominal_inches: Option<f64>,
    measured: &MeasuredValues,
) -> Evaluation {
    let mut evaluation = Evaluation::default();

    let velocity_limit = limits
        .velocity
        .as_ref()
        .and_then(|limit| resolve_velocity_limit(limit, nominal_inches));
    check(
        &mut evaluation,
        "velocity",
        "Velocity",
        "m/s",
        measured.velocity_mps,
        velocity_limit,
    );

    let erosional_limit = match (limits.erosional_c, measured.density_kg_m3) {
        (Some(c), Some(rho)) if rho > 0.0 => Some(c / rho.sqrt()),
        _ => None,
    };
    check(
        &mut evaluation,
        "erosional-velocity",
        "Erosional velocity",
        "m/s",
        measured.velocity_mps,
        erosional_limit,
    );

    check(
        &mut evaluation,
        "momentum",
        "Momentum (rho v^2)",
        "Pa",
        measured.rho_v2_pa,
        limits.rho_v2_pa,
    );

    check(
        &mut evaluation,
        "mach",
        "Mach number",
        "",
        measured.mach,
        limits.mach,
    );

    check(
        &mut evaluation,
        "pressure-gradient",
        "Pressure gradient",
        "kPa/km",
        measured.dp_kpa_per_km,
        limits.dp_kpa_per_km,
    );

    evaluation
}

fn resolve_velocity_limit(limit: &VelocityLimit, nominal_inches: Option<f64>) -> Option<f64> {
    match limit {
        VelocityLimit::Uniform(value) => Some(*value),
        VelocityLimit::Banded(_) => limit.for_size(nominal_inches?),
    }
}

fn check(
    evaluation: &mut Evaluation,
    name: &'static str,
    label: &'static str,
    unit: &'static str,
    measured: Option<f64>,
    limit: Option<f64>,
) {
    let verdict = match (measured, limit) {
        (Some(value), Some(bound)) => {
            if value > bound {
                evaluation
                    .warnings
                    .push(exceedance_warning(label, value, bound, unit));
                Verdict::Fail
            } else {
                Verdict::Pass
            }
        }
        _ => Verdict::NotApplicable,
    };
    evaluation.checks.push(CriterionCheck {
        name,
        label,
        unit,
        measured,
        limit,
        verdict,
    });
}

fn exceedance_warning(label: &str, value: f64, limit: f64, unit: &str) -> String {
    format!("{label} exceeds limit: {value:.2} > {limit:.2} {unit}")
        .trim_end()
        .to_string()
}
