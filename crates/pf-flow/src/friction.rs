//! Darcy friction factor across flow regimes.
//!
//! Laminar: f = 64/Re. Turbulent: Swamee-Jain closed form by default,
//! with an optional Colebrook-White fixed-point refinement seeded from
//! Swamee-Jain. The transition band blends the laminar value at
//! Re = 2300 and the turbulent value at Re = 4000 linearly, which keeps
//! the curve continuous at both regime boundaries.

use pf_core::units::Length;

use crate::error::{FlowError, FlowResult, check_finite};
use crate::properties::{FlowRegime, RE_LAMINAR_MAX, RE_TURBULENT_MIN};

const COLEBROOK_MAX_ITER: u32 = 50;
const COLEBROOK_TOL: f64 = 1e-10;

/// Turbulent-branch correlation choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrictionModel {
    /// Explicit Swamee-Jain approximation of Colebrook-White.
    #[default]
    SwameeJain,
    /// Fixed-point Colebrook-White iteration, Swamee-Jain seeded.
    Colebrook,
}

/// Solved friction factor plus diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionResult {
    /// Darcy friction factor, always > 0.
    pub factor: f64,
    /// Regime the solver branched on.
    pub regime: FlowRegime,
    /// Fixed-point iterations used (0 for closed forms).
    pub iterations: u32,
}

/// Solve the Darcy friction factor for a Reynolds number and pipe geometry.
pub fn friction_factor(
    reynolds: f64,
    diameter: Length,
    roughness: Length,
    model: FrictionModel,
) -> FlowResult<FrictionResult> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(FlowError::InvalidFlow {
            what: "non-positive Reynolds number",
        });
    }
    if diameter.value <= 0.0 {
        return Err(FlowError::InvalidFlow {
            what: "non-positive diameter",
        });
    }
    if roughness.value < 0.0 {
        return Err(FlowError::InvalidFlow {
            what: "negative roughness",
        });
    }

    let rel_rough = roughness.value / diameter.value;
    let regime = FlowRegime::classify(reynolds);

    let (factor, iterations) = match regime {
        FlowRegime::Laminar => (laminar(reynolds), 0),
        FlowRegime::Turbulent => turbulent(reynolds, rel_rough, model)?,
        FlowRegime::Transition => {
            // Blend the laminar value at the lower boundary with the
            // turbulent value at the upper boundary. At Re = 2300 the
            // weight is zero and the result is exactly 64/2300.
            let t = (reynolds - RE_LAMINAR_MAX) / (RE_TURBULENT_MIN - RE_LAMINAR_MAX);
            let f_lam = laminar(RE_LAMINAR_MAX);
            let (f_turb, iters) = turbulent(RE_TURBULENT_MIN, rel_rough, model)?;
            (f_lam * (1.0 - t) + f_turb * t, iters)
        }
    };

    let factor = check_finite(factor, "friction factor")?;
    if factor <= 0.0 {
        return Err(FlowError::InvalidFlow {
            what: "non-positive friction factor",
        });
    }

    Ok(FrictionResult {
        factor,
        regime,
        iterations,
    })
}

fn laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

fn turbulent(reynolds: f64, rel_rough: f64, model: FrictionModel) -> FlowResult<(f64, u32)> {
    let f_sj = swamee_jain(reynolds, rel_rough)?;
    match model {
        FrictionModel::SwameeJain => Ok((f_sj, 0)),
        FrictionModel::Colebrook => colebrook(reynolds, rel_rough, f_sj),
    }
}

/// `f = 0.25 / log10(eps/3.7D + 5.74/Re^0.9)^2`
fn swamee_jain(reynolds: f64, rel_rough: f64) -> FlowResult<f64> {
    let arg = rel_rough / 3.7 + 5.74 / reynolds.powf(0.9);
    let log_term = arg.log10();
    // arg >= 1 would put the log at or above zero; physically that means
    // a roughness larger than the bore, which no correlation covers.
    if !log_term.is_finite() || log_term >= 0.0 {
        return Err(FlowError::InvalidFlow {
            what: "relative roughness outside correlation range",
        });
    }
    Ok(0.25 / (log_term * log_term))
}

/// Fixed-point iteration on `x = -2 log10(eps/3.7D + 2.51 x / Re)`
/// with `x = 1/sqrt(f)`, seeded from Swamee-Jain.
fn colebrook(reynolds: f64, rel_rough: f64, seed: f64) -> FlowResult<(f64, u32)> {
    let mut x = 1.0 / seed.sqrt();
    for iteration in 1..=COLEBROOK_MAX_ITER {
        let arg = rel_rough / 3.7 + 2.51 * x / reynolds;
        if arg <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "Colebrook argument collapsed to zero",
            });
        }
        let next = -2.0 * arg.log10();
        if next <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "Colebrook iteration left the physical branch",
            });
        }
        if (next - x).abs() < COLEBROOK_TOL {
            return Ok((1.0 / (next * next), iteration));
        }
        x = next;
    }
    // Non-convergence in 50 iterations does not happen for physical
    // inputs; report the last iterate rather than a stale seed.
    Ok((1.0 / (x * x), COLEBROOK_MAX_ITER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::mm;

    fn f(re: f64, model: FrictionModel) -> f64 {
        friction_factor(re, mm(154.05), mm(0.0457), model)
            .unwrap()
            .factor
    }

    #[test]
    fn laminar_closed_form() {
        let result = friction_factor(1000.0, mm(100.0), mm(0.05), FrictionModel::SwameeJain).unwrap();
        assert_eq!(result.factor, 64.0 / 1000.0);
        assert_eq!(result.regime, FlowRegime::Laminar);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn exactly_re_2300_is_pure_laminar_value() {
        let result =
            friction_factor(2300.0, mm(154.05), mm(0.0457), FrictionModel::SwameeJain).unwrap();
        assert_eq!(result.factor, 64.0 / 2300.0);
        assert_eq!(result.regime, FlowRegime::Transition);
    }

    #[test]
    fn continuity_at_laminar_boundary() {
        let below = f(2300.0 - 1e-6, FrictionModel::SwameeJain);
        let above = f(2300.0 + 1e-6, FrictionModel::SwameeJain);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn continuity_at_turbulent_boundary() {
        for model in [FrictionModel::SwameeJain, FrictionModel::Colebrook] {
            let below = f(4000.0 - 1e-6, model);
            let above = f(4000.0 + 1e-6, model);
            assert!((below - above).abs() < 1e-6, "{model:?}");
        }
    }

    #[test]
    fn turbulent_factor_non_increasing_in_re() {
        for model in [FrictionModel::SwameeJain, FrictionModel::Colebrook] {
            let mut prev = f(4000.0, model);
            for re in [1e4, 1e5, 1e6, 1e7, 1e8] {
                let next = f(re, model);
                assert!(next <= prev, "f rose from {prev} to {next} at Re={re}");
                prev = next;
            }
        }
    }

    #[test]
    fn colebrook_agrees_with_swamee_jain_within_percent() {
        for re in [1e4, 5e4, 5e5, 5e6] {
            let sj = f(re, FrictionModel::SwameeJain);
            let cw = f(re, FrictionModel::Colebrook);
            assert!((sj - cw).abs() / cw < 0.01, "Re={re}: sj={sj} cw={cw}");
        }
    }

    #[test]
    fn colebrook_reports_iterations() {
        let result =
            friction_factor(2.29e5, mm(154.05), mm(0.0457), FrictionModel::Colebrook).unwrap();
        assert!(result.iterations > 0);
        assert!(result.iterations < COLEBROOK_MAX_ITER);
    }

    #[test]
    fn invalid_inputs_are_errors_not_nan() {
        assert!(friction_factor(0.0, mm(100.0), mm(0.05), FrictionModel::SwameeJain).is_err());
        assert!(friction_factor(-5.0, mm(100.0), mm(0.05), FrictionModel::SwameeJain).is_err());
        assert!(friction_factor(1e5, mm(0.0), mm(0.05), FrictionModel::SwameeJain).is_err());
        assert!(friction_factor(1e5, mm(100.0), mm(-0.05), FrictionModel::SwameeJain).is_err());
        assert!(friction_factor(f64::NAN, mm(100.0), mm(0.05), FrictionModel::SwameeJain).is_err());
        // roughness larger than the bore
        assert!(friction_factor(1e5, mm(1.0), mm(10.0), FrictionModel::SwameeJain).is_err());
    }

    #[test]
    fn smooth_pipe_turbulent_value() {
        // Smooth pipe, Re = 1e5: Swamee-Jain gives ~0.018
        let result = friction_factor(1e5, mm(100.0), mm(0.0), FrictionModel::SwameeJain).unwrap();
        assert!((result.factor - 0.018).abs() < 0.001);
    }
}
