//! Line-sizing calculation.
//!
//! The full chain for one pipe segment: normalize, resolve geometry,
//! flow properties, friction factor, pressure-drop integration, then
//! criteria evaluation for the selected service.

use pf_core::convert::QuantityKind;
use pf_core::units::{m, m3ps};
use pf_criteria::MeasuredValues;
use pf_flow::{FlowState, friction_factor, pressure_drop};
use pf_tables::{ServiceKind, nominal_inches};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::input::{LineKind, LineSizingInput};
use crate::resolve;
use crate::result::{
    BreakdownSnapshot, CriterionSnapshot, FlowSnapshot, FrictionSnapshot, LineCalculationResult,
};
use crate::tables::ReferenceTables;
use crate::validate;

/// Run a line-sizing calculation against the given reference tables.
pub fn calculate_line(
    input: &LineSizingInput,
    tables: &ReferenceTables,
) -> EngineResult<LineCalculationResult> {
    let issues = validate::validate_line(input);
    if !issues.is_empty() {
        return Err(EngineError::Validation(issues));
    }

    let fluid = resolve::fluid_spec(&input.fluid)?;
    let pipe = resolve::pipe_spec(tables, &input.pipe)?;
    let model = resolve::friction_model(input.friction_model.as_deref())?;

    let flow = FlowState::from_flow(
        m3ps(input.flow.si(QuantityKind::FlowRate)?),
        pipe.area(),
        pipe.inside_diameter,
        fluid.density,
        fluid.viscosity,
    )?;
    debug!(
        velocity_m_s = flow.velocity().value,
        reynolds = flow.reynolds(),
        regime = %flow.regime(),
        "flow properties"
    );

    let friction = friction_factor(flow.reynolds(), pipe.inside_diameter, pipe.roughness, model)?;
    let total_k = resolve::total_k(tables, &input.fittings)?;
    let elevation_change = input
        .elevation_change
        .as_ref()
        .map(|dz| dz.si(QuantityKind::Length))
        .transpose()?
        .map(m);

    let dp = pressure_drop(&fluid, &pipe, &flow, &friction, total_k, elevation_change)?;
    debug!(
        friction_factor = friction.factor,
        dp_total_pa = dp.total.value,
        "pressure drop integrated"
    );

    // Mach only applies to the gas path and needs the gas-only fields.
    let mach = match input.line_type {
        LineKind::Gas => fluid
            .sonic_velocity()
            .map(|c| flow.velocity().value / c.value),
        LineKind::Liquid | LineKind::MixedPhase => None,
    };

    let service =
        ServiceKind::from_key(&input.service).ok_or_else(|| EngineError::UnknownKey {
            what: "service",
            key: input.service.clone(),
        })?;
    let limits = tables.criteria.resolve(service)?;
    let measured = MeasuredValues {
        velocity_mps: Some(flow.velocity().value),
        rho_v2_pa: Some(flow.momentum(fluid.density)),
        mach,
        dp_kpa_per_km: Some(dp.gradient_kpa_per_km),
        density_kg_m3: Some(fluid.density.value),
    };
    let evaluation = pf_criteria::evaluate(limits, nominal_inches(&input.pipe.nominal), &measured);

    Ok(LineCalculationResult {
        flow: FlowSnapshot::from_state(&flow),
        friction: FrictionSnapshot::from_result(&friction),
        pressure_drop: BreakdownSnapshot::from_breakdown(&dp.breakdown),
        gradient_kpa_per_km: dp.gradient_kpa_per_km,
        criteria: CriterionSnapshot::from_evaluation(&evaluation),
        warnings: evaluation.warnings,
    })
}
