//! Velocity, Reynolds number, and regime classification.

use std::fmt;

use pf_core::units::{Area, Density, DynVisc, Length, Velocity, VolumeRate, mps};

use crate::error::{FlowError, FlowResult, check_finite};

/// Laminar/transition boundary (fixed, not configurable).
pub const RE_LAMINAR_MAX: f64 = 2_300.0;
/// Transition/turbulent boundary (fixed, not configurable).
pub const RE_TURBULENT_MIN: f64 = 4_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transition,
    Turbulent,
}

impl FlowRegime {
    /// Regime is a pure function of Reynolds number.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < RE_LAMINAR_MAX {
            Self::Laminar
        } else if reynolds < RE_TURBULENT_MIN {
            Self::Transition
        } else {
            Self::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "Laminar"),
            Self::Transition => write!(f, "Transition"),
            Self::Turbulent => write!(f, "Turbulent"),
        }
    }
}

/// Derived flow quantities for one pipe cross-section.
///
/// Constructed only through [`FlowState::from_flow`], so the regime is
/// always consistent with the Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    flow_rate: VolumeRate,
    velocity: Velocity,
    reynolds: f64,
    regime: FlowRegime,
}

impl FlowState {
    /// Compute `v = Q/A` and `Re = rho v D / mu`.
    pub fn from_flow(
        flow_rate: VolumeRate,
        area: Area,
        diameter: Length,
        density: Density,
        viscosity: DynVisc,
    ) -> FlowResult<Self> {
        if flow_rate.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive flow rate",
            });
        }
        if area.value <= 0.0 || diameter.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive flow area or diameter",
            });
        }
        if density.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive density",
            });
        }
        if viscosity.value <= 0.0 {
            return Err(FlowError::InvalidFlow {
                what: "non-positive viscosity",
            });
        }

        let velocity = flow_rate.value / area.value;
        let reynolds = density.value * velocity * diameter.value / viscosity.value;
        check_finite(velocity, "velocity")?;
        check_finite(reynolds, "Reynolds number")?;

        Ok(Self {
            flow_rate,
            velocity: mps(velocity),
            reynolds,
            regime: FlowRegime::classify(reynolds),
        })
    }

    #[inline]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    #[inline]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[inline]
    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    #[inline]
    pub fn regime(&self) -> FlowRegime {
        self.regime
    }

    /// One velocity head `rho v^2 / 2` [Pa].
    pub fn velocity_head(&self, density: Density) -> f64 {
        density.value * self.velocity.value * self.velocity.value / 2.0
    }

    /// Momentum `rho v^2` [Pa], the erosion/vibration screening quantity.
    pub fn momentum(&self, density: Density) -> f64 {
        density.value * self.velocity.value * self.velocity.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{kgpm3, m, m2, m3ps, pas};

    #[test]
    fn regime_boundaries_exact() {
        assert_eq!(FlowRegime::classify(2_299.999), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(2_300.0), FlowRegime::Transition);
        assert_eq!(FlowRegime::classify(3_999.999), FlowRegime::Transition);
        assert_eq!(FlowRegime::classify(4_000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn water_in_six_inch_pipe() {
        // 100 m3/h of water in 6" Sch 40
        let d = 0.15405;
        let area = std::f64::consts::PI * d * d / 4.0;
        let state = FlowState::from_flow(
            m3ps(100.0 / 3600.0),
            m2(area),
            m(d),
            kgpm3(1000.0),
            pas(0.001),
        )
        .unwrap();

        assert!((state.velocity().value - 1.49).abs() < 0.01);
        assert!((state.reynolds() - 2.29e5).abs() / 2.29e5 < 0.01);
        assert_eq!(state.regime(), FlowRegime::Turbulent);
    }

    #[test]
    fn zero_flow_rejected() {
        let result = FlowState::from_flow(
            m3ps(0.0),
            m2(0.01),
            m(0.1),
            kgpm3(1000.0),
            pas(0.001),
        );
        assert!(matches!(result, Err(FlowError::InvalidFlow { .. })));
    }

    #[test]
    fn momentum_is_twice_velocity_head() {
        let state = FlowState::from_flow(
            m3ps(0.02),
            m2(0.01),
            m(0.1),
            kgpm3(800.0),
            pas(0.002),
        )
        .unwrap();
        let rho = kgpm3(800.0);
        assert!((state.momentum(rho) - 2.0 * state.velocity_head(rho)).abs() < 1e-12);
    }
}
