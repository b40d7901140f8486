//! Pressure-drop integration over a pipe segment.
//!
//! Darcy-Weisbach for straight-pipe friction, K-factors for fittings,
//! and an optional elevation term, each reported as its own breakdown
//! contribution.

use pf_core::units::constants::G0_MPS2;
use pf_core::units::{Length, Pressure, pa};

use crate::breakdown::Breakdown;
use crate::error::{FlowResult, check_finite};
use crate::fluid::FluidSpec;
use crate::friction::FrictionResult;
use crate::pipe::PipeSpec;
use crate::properties::FlowState;

/// Labels used in the pressure-drop breakdown.
pub mod labels {
    pub const PIPE_FRICTION: &str = "pipe-friction";
    pub const FITTINGS: &str = "fittings";
    pub const ELEVATION: &str = "elevation";
}

/// Pressure losses over one segment, additive by contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureDropResult {
    /// Contributions in Pa; sums to `total`.
    pub breakdown: Breakdown,
    pub total: Pressure,
    /// Friction gradient [kPa/km], straight pipe only.
    pub gradient_kpa_per_km: f64,
}

impl PressureDropResult {
    /// Friction head in meters of flowing fluid.
    pub fn friction_head_m(&self, density_kg_m3: f64) -> f64 {
        let friction = self.breakdown.get(labels::PIPE_FRICTION).unwrap_or(0.0)
            + self.breakdown.get(labels::FITTINGS).unwrap_or(0.0);
        friction / (density_kg_m3 * G0_MPS2)
    }
}

/// Integrate pressure drop for a segment.
///
/// `dp_pipe = f (L/D) rho v^2/2`, `dp_fittings = sum(K) rho v^2/2`,
/// `dp_elevation = rho g dz` (positive dz = uphill flow). The elevation
/// term is only present when a change is supplied.
pub fn pressure_drop(
    fluid: &FluidSpec,
    pipe: &PipeSpec,
    flow: &FlowState,
    friction: &FrictionResult,
    total_k: f64,
    elevation_change: Option<Length>,
) -> FlowResult<PressureDropResult> {
    pipe.check()?;

    let velocity_head = flow.velocity_head(fluid.density);
    let length = pipe.length.value;
    let diameter = pipe.inside_diameter.value;

    let dp_pipe = check_finite(
        friction.factor * (length / diameter) * velocity_head,
        "pipe friction pressure drop",
    )?;
    let dp_fittings = check_finite(total_k * velocity_head, "fitting pressure drop")?;

    let mut breakdown = Breakdown::new();
    breakdown.push(labels::PIPE_FRICTION, dp_pipe);
    breakdown.push(labels::FITTINGS, dp_fittings);
    if let Some(dz) = elevation_change {
        let dp_elevation = fluid.density.value * G0_MPS2 * dz.value;
        breakdown.push(labels::ELEVATION, dp_elevation);
    }

    let gradient_kpa_per_km = if length > 0.0 {
        (dp_pipe / 1000.0) / (length / 1000.0)
    } else {
        0.0
    };

    let total = breakdown.total();
    Ok(PressureDropResult {
        breakdown,
        total: pa(total),
        gradient_kpa_per_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friction::{FrictionModel, friction_factor};
    use pf_core::numeric::sums_to;
    use pf_core::units::{kelvin, kgpm3, m, m3ps, mm, pas};

    fn water() -> FluidSpec {
        FluidSpec::liquid(kgpm3(1000.0), pas(0.001), kelvin(293.15))
    }

    fn six_inch(length_m: f64) -> PipeSpec {
        PipeSpec {
            nominal: "6".into(),
            schedule: "40".into(),
            inside_diameter: mm(154.05),
            roughness: mm(0.0457),
            length: m(length_m),
        }
    }

    fn flow_100m3h(pipe: &PipeSpec, fluid: &FluidSpec) -> FlowState {
        FlowState::from_flow(
            m3ps(100.0 / 3600.0),
            pipe.area(),
            pipe.inside_diameter,
            fluid.density,
            fluid.viscosity,
        )
        .unwrap()
    }

    #[test]
    fn water_reference_case() {
        // 100 m3/h water, 6" Sch 40, 100 m: dp ~ 0.12 bar
        let fluid = water();
        let pipe = six_inch(100.0);
        let flow = flow_100m3h(&pipe, &fluid);
        let friction = friction_factor(
            flow.reynolds(),
            pipe.inside_diameter,
            pipe.roughness,
            FrictionModel::SwameeJain,
        )
        .unwrap();

        let result = pressure_drop(&fluid, &pipe, &flow, &friction, 0.0, None).unwrap();
        let dp = result.breakdown.get(labels::PIPE_FRICTION).unwrap();
        assert!(dp > 10_000.0 && dp < 15_000.0, "dp = {dp}");
        assert!((result.gradient_kpa_per_km - dp / 100.0).abs() < 1e-9);
    }

    #[test]
    fn swamee_jain_within_one_percent_of_colebrook() {
        let fluid = water();
        let pipe = six_inch(100.0);
        let flow = flow_100m3h(&pipe, &fluid);

        let mut totals = Vec::new();
        for model in [FrictionModel::SwameeJain, FrictionModel::Colebrook] {
            let friction = friction_factor(
                flow.reynolds(),
                pipe.inside_diameter,
                pipe.roughness,
                model,
            )
            .unwrap();
            let result = pressure_drop(&fluid, &pipe, &flow, &friction, 0.0, None).unwrap();
            totals.push(result.total.value);
        }
        let (sj, cw) = (totals[0], totals[1]);
        assert!((sj - cw).abs() / cw < 0.01, "sj={sj} cw={cw}");
    }

    #[test]
    fn breakdown_sums_to_total() {
        let fluid = water();
        let pipe = six_inch(50.0);
        let flow = flow_100m3h(&pipe, &fluid);
        let friction = friction_factor(
            flow.reynolds(),
            pipe.inside_diameter,
            pipe.roughness,
            FrictionModel::SwameeJain,
        )
        .unwrap();

        let result =
            pressure_drop(&fluid, &pipe, &flow, &friction, 3.2, Some(m(5.0))).unwrap();
        let values: Vec<f64> = result.breakdown.parts().iter().map(|(_, v)| *v).collect();
        assert_eq!(values.len(), 3);
        assert!(sums_to(&values, result.total.value));
    }

    #[test]
    fn downhill_elevation_credits_pressure() {
        let fluid = water();
        let pipe = six_inch(50.0);
        let flow = flow_100m3h(&pipe, &fluid);
        let friction = friction_factor(
            flow.reynolds(),
            pipe.inside_diameter,
            pipe.roughness,
            FrictionModel::SwameeJain,
        )
        .unwrap();

        let flat = pressure_drop(&fluid, &pipe, &flow, &friction, 0.0, None).unwrap();
        let down = pressure_drop(&fluid, &pipe, &flow, &friction, 0.0, Some(m(-5.0))).unwrap();
        assert!(down.total.value < flat.total.value);
        let dz_term = down.breakdown.get(labels::ELEVATION).unwrap();
        assert!((dz_term - (-1000.0 * G0_MPS2 * 5.0)).abs() < 1e-6);
    }

    #[test]
    fn friction_head_matches_pressure_form() {
        let fluid = water();
        let pipe = six_inch(100.0);
        let flow = flow_100m3h(&pipe, &fluid);
        let friction = friction_factor(
            flow.reynolds(),
            pipe.inside_diameter,
            pipe.roughness,
            FrictionModel::SwameeJain,
        )
        .unwrap();

        let result = pressure_drop(&fluid, &pipe, &flow, &friction, 1.0, None).unwrap();
        let head = result.friction_head_m(1000.0);
        assert!((head * 1000.0 * G0_MPS2 - result.total.value).abs() < 1e-9);
    }
}
