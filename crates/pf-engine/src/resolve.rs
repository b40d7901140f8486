//! Shared input resolution: units normalized, table keys looked up.

use pf_core::convert::QuantityKind;
use pf_core::units::{kelvin, kgpm3, m, m2, pa, pas};
use pf_flow::{FluidSpec, FrictionModel, PipeSpec};
use pf_tables::PipeGeometry;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::input::{FittingCount, FluidInput, PipeInput};
use crate::tables::ReferenceTables;

pub(crate) fn fluid_spec(input: &FluidInput) -> EngineResult<FluidSpec> {
    let vapor_pressure = input
        .vapor_pressure
        .as_ref()
        .map(|vp| vp.si(QuantityKind::Pressure))
        .transpose()?
        .map(pa);

    let fluid = FluidSpec {
        density: kgpm3(input.density.si(QuantityKind::Density)?),
        viscosity: pas(input.viscosity.si(QuantityKind::Viscosity)?),
        temperature: kelvin(input.temperature.si(QuantityKind::Temperature)?),
        vapor_pressure,
        z: input.compressibility,
        molar_mass: input.molar_mass,
        specific_heat_ratio: input.specific_heat_ratio,
    };
    fluid.check()?;
    Ok(fluid)
}

/// Resolve (nominal, schedule) through the table, falling back to the
/// caller-supplied diameter on a miss. Zero is never assumed.
pub(crate) fn pipe_spec(tables: &ReferenceTables, input: &PipeInput) -> EngineResult<PipeSpec> {
    let geometry = match tables.schedules.resolve(&input.nominal, &input.schedule) {
        Ok(geometry) => geometry,
        Err(miss) => match &input.fallback_diameter {
            Some(fallback) => {
                let d = fallback.si(QuantityKind::LengthSmall)?;
                debug!(
                    nominal = %input.nominal,
                    schedule = %input.schedule,
                    fallback_m = d,
                    "schedule table miss, using fallback diameter"
                );
                PipeGeometry {
                    inside_diameter: m(d),
                    area: m2(std::f64::consts::PI * d * d / 4.0),
                }
            }
            None => return Err(miss.into()),
        },
    };

    let roughness = tables.roughness.resolve(&input.material)?;
    let pipe = PipeSpec {
        nominal: input.nominal.clone(),
        schedule: input.schedule.clone(),
        inside_diameter: geometry.inside_diameter,
        roughness,
        length: m(input.length.si(QuantityKind::Length)?),
    };
    pipe.check()?;
    Ok(pipe)
}

pub(crate) fn friction_model(key: Option<&str>) -> EngineResult<FrictionModel> {
    match key {
        None | Some("swamee-jain") => Ok(FrictionModel::SwameeJain),
        Some("colebrook") => Ok(FrictionModel::Colebrook),
        Some(other) => Err(EngineError::UnknownKey {
            what: "friction model",
            key: other.to_string(),
        }),
    }
}

pub(crate) fn total_k(tables: &ReferenceTables, fittings: &[FittingCount]) -> EngineResult<f64> {
    let counts: Vec<(String, u32)> = fittings
        .iter()
        .map(|f| (f.fitting.clone(), f.count))
        .collect();
    Ok(tables.fittings.total_k(&counts)?)
}
