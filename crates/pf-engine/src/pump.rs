//! Pump-sizing calculation.
//!
//! Suction and discharge sides are evaluated independently (their own
//! flow-property and friction passes), then composed into TDH by the
//! selected strategy. NPSH available, optional decorators, and power
//! draw complete the result.

use pf_core::convert::QuantityKind;
use pf_core::units::{m, m3ps, mps, pa};
use pf_criteria::MeasuredValues;
use pf_flow::{FlowState, FluidSpec, FrictionModel, friction_factor, pressure_drop};
use pf_pump::{
    AccelerationHead, FluidElasticity, NpshInput, PumpMode, ReciprocatingKind, SideConditions,
    ViscosityCorrection, brake_power, hydraulic_power, npsh_available, npsh_margin,
    total_dynamic_head,
};
use pf_tables::{ServiceKind, nominal_inches};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::input::{PumpModeInput, PumpSide, PumpSizingInput, ReciprocatingInput};
use crate::resolve;
use crate::result::{
    BreakdownSnapshot, CriterionSnapshot, FlowSnapshot, FrictionSnapshot, NpshSnapshot,
    PumpCalculationResult, SideSnapshot, ViscousSnapshot,
};
use crate::tables::ReferenceTables;
use crate::validate;

/// NPSH margin below which a cavitation warning is attached.
const NPSH_MARGIN_WARN: f64 = 1.1;

struct SideEvaluation {
    flow: FlowState,
    friction: Option<pf_flow::FrictionResult>,
    friction_head_m: f64,
}

impl SideEvaluation {
    fn snapshot(&self) -> SideSnapshot {
        SideSnapshot {
            flow: FlowSnapshot::from_state(&self.flow),
            friction: self.friction.as_ref().map(FrictionSnapshot::from_result),
            friction_head_m: self.friction_head_m,
        }
    }
}

/// Run a pump-sizing calculation against the given reference tables.
pub fn calculate_pump(
    input: &PumpSizingInput,
    tables: &ReferenceTables,
) -> EngineResult<PumpCalculationResult> {
    let issues = validate::validate_pump(input);
    if !issues.is_empty() {
        return Err(EngineError::Validation(issues));
    }

    let fluid = resolve::fluid_spec(&input.fluid)?;
    let model = resolve::friction_model(input.friction_model.as_deref())?;
    let flow_m3s = input.flow.si(QuantityKind::FlowRate)?;

    let mode = match input.mode {
        PumpModeInput::SystemSizing => PumpMode::SystemSizing,
        PumpModeInput::FlangeRating => PumpMode::FlangeRating,
    };
    // Flange rating works from gauge readings: the piping friction is
    // already reflected in the measured pressures.
    let with_friction = mode == PumpMode::SystemSizing;

    let suction = evaluate_side(&fluid, &input.suction, flow_m3s, model, tables, with_friction)?;
    let discharge = evaluate_side(
        &fluid,
        &input.discharge,
        flow_m3s,
        model,
        tables,
        with_friction,
    )?;

    let suction_conditions = side_conditions(&input.suction, &suction)?;
    let discharge_conditions = side_conditions(&input.discharge, &discharge)?;
    let head = total_dynamic_head(mode, fluid.density, &suction_conditions, &discharge_conditions)?;
    debug!(tdh_m = head.total_m, ?mode, "total dynamic head composed");

    let mut warnings = Vec::new();
    let npsh = npsh_snapshot(input, &fluid, &suction, &suction_conditions, &mut warnings)?;

    let hydraulic = hydraulic_power(fluid.density, m3ps(flow_m3s), head.total_m)?;
    let brake = input
        .efficiency
        .map(|eta| brake_power(hydraulic, eta))
        .transpose()?;

    let viscous = input
        .viscous
        .as_ref()
        .map(|v| {
            ViscosityCorrection::new(
                flow_m3s * 3_600.0,
                head.total_m,
                v.speed_rpm,
                v.kinematic_viscosity_cst,
            )
        })
        .transpose()?
        .map(|correction| ViscousSnapshot {
            b: correction.b,
            cq: correction.cq,
            ch: correction.ch,
            ceta: correction.ceta,
            corrected_head_m: correction.corrected_head_m(head.total_m),
            corrected_efficiency: input
                .efficiency
                .map(|eta| correction.corrected_efficiency(eta)),
        });

    let limits = tables.criteria.resolve(ServiceKind::PumpSuction)?;
    let measured = MeasuredValues {
        velocity_mps: Some(suction.flow.velocity().value),
        density_kg_m3: Some(fluid.density.value),
        ..Default::default()
    };
    let evaluation = pf_criteria::evaluate(
        limits,
        nominal_inches(&input.suction.pipe.nominal),
        &measured,
    );
    warnings.extend(evaluation.warnings.iter().cloned());

    Ok(PumpCalculationResult {
        mode: match mode {
            PumpMode::SystemSizing => "system-sizing".to_string(),
            PumpMode::FlangeRating => "flange-rating".to_string(),
        },
        suction: suction.snapshot(),
        discharge: discharge.snapshot(),
        head: BreakdownSnapshot::from_breakdown(&head.breakdown),
        total_dynamic_head_m: head.total_m,
        npsh,
        hydraulic_power_w: hydraulic.value,
        brake_power_w: brake.map(|p| p.value),
        viscous,
        criteria: CriterionSnapshot::from_evaluation(&evaluation),
        warnings,
    })
}

fn evaluate_side(
    fluid: &FluidSpec,
    side: &PumpSide,
    flow_m3s: f64,
    model: FrictionModel,
    tables: &ReferenceTables,
    with_friction: bool,
) -> EngineResult<SideEvaluation> {
    let pipe = resolve::pipe_spec(tables, &side.pipe)?;
    let flow = FlowState::from_flow(
        m3ps(flow_m3s),
        pipe.area(),
        pipe.inside_diameter,
        fluid.density,
        fluid.viscosity,
    )?;

    if !with_friction {
        return Ok(SideEvaluation {
            flow,
            friction: None,
            friction_head_m: 0.0,
        });
    }

    let friction = friction_factor(flow.reynolds(), pipe.inside_diameter, pipe.roughness, model)?;
    let total_k = resolve::total_k(tables, &side.fittings)?;
    let dp = pressure_drop(fluid, &pipe, &flow, &friction, total_k, None)?;
    Ok(SideEvaluation {
        flow,
        friction: Some(friction),
        friction_head_m: dp.friction_head_m(fluid.density.value),
    })
}

fn side_conditions(side: &PumpSide, evaluated: &SideEvaluation) -> EngineResult<SideConditions> {
    Ok(SideConditions {
        pressure: pa(side.pressure.si(QuantityKind::Pressure)?),
        elevation: m(side.elevation.si(QuantityKind::Length)?),
        friction_head_m: evaluated.friction_head_m,
        velocity_mps: evaluated.flow.velocity().value,
    })
}

fn npsh_snapshot(
    input: &PumpSizingInput,
    fluid: &FluidSpec,
    suction: &SideEvaluation,
    conditions: &SideConditions,
    warnings: &mut Vec<String>,
) -> EngineResult<Option<NpshSnapshot>> {
    // NPSH is meaningless without a vapor pressure.
    let Some(vapor_pressure) = fluid.vapor_pressure else {
        return Ok(None);
    };

    let base = npsh_available(&NpshInput {
        suction_pressure: conditions.pressure,
        vapor_pressure,
        density: fluid.density,
        static_head_m: conditions.elevation.value,
        friction_head_m: conditions.friction_head_m,
        velocity_mps: conditions.velocity_mps,
        include_velocity_head: input.include_suction_velocity_head,
    })?;

    let (available_m, acceleration_head_m) = match &input.reciprocating {
        Some(reciprocating) => {
            let acceleration = acceleration_head(reciprocating, input, suction)?;
            let debit = acceleration.head_m()?;
            (acceleration.apply_to_npsha(base)?, Some(debit))
        }
        None => (base, None),
    };

    let required_m = input
        .npsh_required
        .as_ref()
        .map(|npshr| npshr.si(QuantityKind::Length))
        .transpose()?;
    let margin = required_m.map(|required| npsh_margin(available_m, Some(required)));

    if let Some(margin) = margin {
        if margin < NPSH_MARGIN_WARN {
            warnings.push(format!(
                "NPSH margin {margin:.2} below {NPSH_MARGIN_WARN}: cavitation risk"
            ));
        }
    }

    Ok(Some(NpshSnapshot {
        available_m,
        required_m,
        margin,
        acceleration_head_m,
    }))
}

fn acceleration_head(
    reciprocating: &ReciprocatingInput,
    input: &PumpSizingInput,
    suction: &SideEvaluation,
) -> EngineResult<AccelerationHead> {
    let kind = match reciprocating.kind.as_str() {
        "simplex" => ReciprocatingKind::Simplex,
        "duplex" => ReciprocatingKind::Duplex,
        "triplex" => ReciprocatingKind::Triplex,
        "quintuplex" => ReciprocatingKind::Quintuplex,
        "septuplex" => ReciprocatingKind::Septuplex,
        "nonuplex" => ReciprocatingKind::Nonuplex,
        other => {
            return Err(EngineError::UnknownKey {
                what: "reciprocating pump kind",
                key: other.to_string(),
            });
        }
    };
    let elasticity = match reciprocating.elasticity.as_str() {
        "deaerated-water" => FluidElasticity::DeaeratedWater,
        "water" => FluidElasticity::Water,
        "hydrocarbon" => FluidElasticity::Hydrocarbon,
        "compressible-hydrocarbon" => FluidElasticity::CompressibleHydrocarbon,
        other => {
            return Err(EngineError::UnknownKey {
                what: "fluid elasticity",
                key: other.to_string(),
            });
        }
    };

    Ok(AccelerationHead {
        suction_line_length: m(input.suction.pipe.length.si(QuantityKind::Length)?),
        line_velocity: mps(suction.flow.velocity().value),
        pump_speed_rpm: reciprocating.speed_rpm,
        kind,
        elasticity,
    })
}
