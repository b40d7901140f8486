//! Serializable result snapshots.
//!
//! Plain-f64 views of the typed internals, with SI units spelled out in
//! the field names. Consumers (display layer, CLI JSON output) read
//! these; nothing mutates a result after assembly.

use pf_criteria::{CriterionCheck, Evaluation};
use pf_flow::{Breakdown, FlowState, FrictionResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub flow_m3_s: f64,
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub regime: String,
}

impl FlowSnapshot {
    pub(crate) fn from_state(state: &FlowState) -> Self {
        Self {
            flow_m3_s: state.flow_rate().value,
            velocity_m_s: state.velocity().value,
            reynolds: state.reynolds(),
            regime: state.regime().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrictionSnapshot {
    pub factor: f64,
    pub regime: String,
    pub iterations: u32,
}

impl FrictionSnapshot {
    pub(crate) fn from_result(result: &FrictionResult) -> Self {
        Self {
            factor: result.factor,
            regime: result.regime.to_string(),
            iterations: result.iterations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownPart {
    pub label: String,
    pub value: f64,
}

/// Additive contributions plus their total; the parts always sum to
/// `total` within float tolerance.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownSnapshot {
    pub parts: Vec<BreakdownPart>,
    pub total: f64,
}

impl BreakdownSnapshot {
    pub(crate) fn from_breakdown(breakdown: &Breakdown) -> Self {
        Self {
            parts: breakdown
                .parts()
                .iter()
                .map(|(label, value)| BreakdownPart {
                    label: (*label).to_string(),
                    value: *value,
                })
                .collect(),
            total: breakdown.total(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionSnapshot {
    pub name: String,
    pub measured: Option<f64>,
    pub limit: Option<f64>,
    pub verdict: String,
}

impl CriterionSnapshot {
    fn from_check(check: &CriterionCheck) -> Self {
        Self {
            name: check.name.to_string(),
            measured: check.measured,
            limit: check.limit,
            verdict: check.verdict.to_string(),
        }
    }

    pub(crate) fn from_evaluation(evaluation: &Evaluation) -> Vec<Self> {
        evaluation.checks.iter().map(Self::from_check).collect()
    }
}

/// Line-sizing output: the single immutable result object.
#[derive(Debug, Clone, Serialize)]
pub struct LineCalculationResult {
    pub flow: FlowSnapshot,
    pub friction: FrictionSnapshot,
    /// Pressure contributions [Pa].
    pub pressure_drop: BreakdownSnapshot,
    pub gradient_kpa_per_km: f64,
    pub criteria: Vec<CriterionSnapshot>,
    pub warnings: Vec<String>,
}

/// One pump side after its independent evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct SideSnapshot {
    pub flow: FlowSnapshot,
    pub friction: Option<FrictionSnapshot>,
    pub friction_head_m: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NpshSnapshot {
    pub available_m: f64,
    pub required_m: Option<f64>,
    /// available / required; absent when no requirement was given.
    pub margin: Option<f64>,
    /// Reciprocating acceleration head already debited, when present.
    pub acceleration_head_m: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViscousSnapshot {
    pub b: f64,
    pub cq: f64,
    pub ch: f64,
    pub ceta: f64,
    pub corrected_head_m: f64,
    pub corrected_efficiency: Option<f64>,
}

/// Pump-sizing output.
#[derive(Debug, Clone, Serialize)]
pub struct PumpCalculationResult {
    pub mode: String,
    pub suction: SideSnapshot,
    pub discharge: SideSnapshot,
    /// Head contributions [m of fluid].
    pub head: BreakdownSnapshot,
    pub total_dynamic_head_m: f64,
    pub npsh: Option<NpshSnapshot>,
    pub hydraulic_power_w: f64,
    pub brake_power_w: Option<f64>,
    pub viscous: Option<ViscousSnapshot>,
    pub criteria: Vec<CriterionSnapshot>,
    pub warnings: Vec<String>,
}

/// Tube-bundle geometry output.
#[derive(Debug, Clone, Serialize)]
pub struct BundleResult {
    pub tube_count: u32,
    /// Bundle available inside the given shell.
    pub bundle_diameter_m: f64,
    /// Regression bundle diameter for `tube_count`, and the shell that
    /// bundle would need; a consistency view of the inverse operation.
    pub regression_bundle_diameter_m: f64,
    pub regression_shell_diameter_m: f64,
}
