//! Input validation: collected, never short-circuited.
//!
//! Every problem is recorded so the caller can report them all at once.
//! A non-empty issue list aborts the calculation before any physics
//! runs; partial results are never produced.

use pf_core::convert::{QuantityKind, to_si};

use crate::error::ValidationIssue;
use crate::input::{FluidInput, LineSizingInput, Measurement, PipeInput, PumpSizingInput};

pub(crate) fn validate_line(input: &LineSizingInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_positive(&mut issues, "flow", &input.flow);
    validate_fluid(&mut issues, "fluid", &input.fluid);
    validate_pipe(&mut issues, "pipe", &input.pipe);
    issues
}

pub(crate) fn validate_pump(input: &PumpSizingInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_positive(&mut issues, "flow", &input.flow);
    validate_fluid(&mut issues, "fluid", &input.fluid);
    validate_pipe(&mut issues, "suction.pipe", &input.suction.pipe);
    validate_pipe(&mut issues, "discharge.pipe", &input.discharge.pipe);

    if let Some(efficiency) = input.efficiency {
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            push(&mut issues, "efficiency", "must be in (0, 1]");
        }
    }
    if let Some(reciprocating) = &input.reciprocating {
        if reciprocating.speed_rpm <= 0.0 {
            push(&mut issues, "reciprocating.speed_rpm", "must be positive");
        }
    }
    if let Some(viscous) = &input.viscous {
        if viscous.kinematic_viscosity_cst <= 0.0 {
            push(&mut issues, "viscous.kinematic_viscosity_cst", "must be positive");
        }
        if viscous.speed_rpm <= 0.0 {
            push(&mut issues, "viscous.speed_rpm", "must be positive");
        }
    }
    issues
}

fn validate_fluid(issues: &mut Vec<ValidationIssue>, field: &str, fluid: &FluidInput) {
    require_positive(issues, &format!("{field}.density"), &fluid.density);
    require_positive(issues, &format!("{field}.viscosity"), &fluid.viscosity);

    // Below-absolute-zero check needs the unit; an unknown unit is
    // reported by the normalizer later, not here.
    if let Ok(kelvin) = to_si(
        fluid.temperature.value,
        QuantityKind::Temperature,
        &fluid.temperature.unit,
    ) {
        if kelvin <= 0.0 {
            push(
                issues,
                &format!("{field}.temperature"),
                "below absolute zero",
            );
        }
    }

    if let Some(vapor) = &fluid.vapor_pressure {
        if vapor.value < 0.0 {
            push(
                issues,
                &format!("{field}.vapor_pressure"),
                "must not be negative",
            );
        }
    }
    if let Some(z) = fluid.compressibility {
        if z <= 0.0 {
            push(issues, &format!("{field}.compressibility"), "must be positive");
        }
    }
    if let Some(molar_mass) = fluid.molar_mass {
        if molar_mass <= 0.0 {
            push(issues, &format!("{field}.molar_mass"), "must be positive");
        }
    }
    if let Some(k) = fluid.specific_heat_ratio {
        if k <= 1.0 {
            push(
                issues,
                &format!("{field}.specific_heat_ratio"),
                "must exceed 1",
            );
        }
    }
}

fn validate_pipe(issues: &mut Vec<ValidationIssue>, field: &str, pipe: &PipeInput) {
    if pipe.length.value < 0.0 {
        push(issues, &format!("{field}.length"), "must not be negative");
    }
    if let Some(fallback) = &pipe.fallback_diameter {
        if fallback.value <= 0.0 {
            push(
                issues,
                &format!("{field}.fallback_diameter"),
                "must be positive",
            );
        }
    }
}

fn require_positive(issues: &mut Vec<ValidationIssue>, field: &str, measurement: &Measurement) {
    if !(measurement.value > 0.0) || !measurement.value.is_finite() {
        push(issues, field, "must be positive");
    }
}

fn push(issues: &mut Vec<ValidationIssue>, field: &str, message: &str) {
    issues.push(ValidationIssue {
        field: field.to_string(),
        message: message.to_string(),
    });
}
