//! pf-flow: single-pipe hydraulics.
//!
//! Pure function chain from fluid + pipe + flow rate to velocity,
//! Reynolds number, Darcy friction factor, and an additive pressure-drop
//! breakdown. No I/O, no shared state; every result is rebuilt from
//! scratch per invocation.

pub mod breakdown;
pub mod dp;
pub mod error;
pub mod fluid;
pub mod friction;
pub mod pipe;
pub mod properties;

pub use breakdown::Breakdown;
pub use dp::{PressureDropResult, pressure_drop};
pub use error::{FlowError, FlowResult};
pub use fluid::FluidSpec;
pub use friction::{FrictionModel, FrictionResult, friction_factor};
pub use pipe::PipeSpec;
pub use properties::{FlowRegime, FlowState, RE_LAMINAR_MAX, RE_TURBULENT_MIN};
