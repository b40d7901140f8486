//! pf-pump: pump head composition and suction checks.
//!
//! Total Dynamic Head as an additive breakdown of static, friction,
//! pressure, and velocity terms; NPSH available; hydraulic and brake
//! power. Reciprocating acceleration head and the HI viscous-performance
//! correction are decorators layered on top of the base results, so the
//! core composition stays auditable.

pub mod corrections;
pub mod error;
pub mod head;
pub mod npsh;
pub mod power;

pub use corrections::{
    AccelerationHead, FluidElasticity, ReciprocatingKind, ViscosityCorrection,
};
pub use error::{PumpError, PumpResult};
pub use head::{HeadBreakdown, PumpMode, SideConditions, total_dynamic_head};
pub use npsh::{NpshInput, npsh_available, npsh_margin};
pub use power::{brake_power, hydraulic_power};
