//! Tube count and bundle/shell diameter sizing.

use pf_core::units::{Length, m};
use pf_tables::{HeadType, TemaTable, TubePattern};

use crate::error::{ExchangerError, ExchangerResult};

/// Tube field description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleLayout {
    pub tube_od: Length,
    pub pitch: Length,
    pub pattern: TubePattern,
    pub passes: u32,
}

impl BundleLayout {
    fn check(&self) -> ExchangerResult<()> {
        if self.tube_od.value <= 0.0 {
            return Err(ExchangerError::InvalidArg {
                what: "non-positive tube OD",
            });
        }
        if self.pitch.value < self.tube_od.value {
            return Err(ExchangerError::InvalidArg {
                what: "pitch smaller than tube OD",
            });
        }
        if self.passes == 0 {
            return Err(ExchangerError::InvalidArg {
                what: "zero tube passes",
            });
        }
        Ok(())
    }
}

/// Bundle diameter available inside a shell for a rear-head type.
pub fn shell_to_bundle(
    tema: &TemaTable,
    shell_inside: Length,
    head: HeadType,
) -> ExchangerResult<Length> {
    let bundle = shell_inside.value - tema.clearance(head).value;
    if bundle <= 0.0 {
        return Err(ExchangerError::InvalidArg {
            what: "shell too small for head clearance",
        });
    }
    Ok(m(bundle))
}

/// Estimate the tube count that fits a shell.
///
/// Two estimators are averaged: an area-ratio count over the tube field
/// that the outermost row actually occupies, and the Palen correlation
/// `Nt = 0.785 (CTP/CL) (Db/Pt)^2`. Their mean is floored to a whole
/// tube.
pub fn tube_count(
    tema: &TemaTable,
    shell_inside: Length,
    head: HeadType,
    layout: &BundleLayout,
) -> ExchangerResult<u32> {
    layout.check()?;
    let bundle = shell_to_bundle(tema, shell_inside, head)?;

    let ctp = tema.ctp(layout.passes);
    let cl = tema.cl(layout.pattern);
    let pitch = layout.pitch.value;

    // Area ratio: tube centers stay half a tube inside the bundle circle.
    let field_diameter = bundle.value - layout.tube_od.value;
    if field_diameter <= 0.0 {
        return Err(ExchangerError::InvalidArg {
            what: "bundle smaller than one tube",
        });
    }
    let field_area = std::f64::consts::PI * field_diameter * field_diameter / 4.0;
    let by_area = ctp * field_area / (cl * pitch * pitch);

    // Palen correlation over the full bundle circle.
    let ratio = bundle.value / pitch;
    let by_palen = 0.785 * (ctp / cl) * ratio * ratio;

    let mean = (by_area + by_palen) / 2.0;
    if !mean.is_finite() || mean < 1.0 {
        return Err(ExchangerError::InvalidArg {
            what: "layout yields no whole tube",
        });
    }
    Ok(mean.floor() as u32)
}

/// Bundle diameter for a tube count: `Db = do (Nt/K1)^(1/n1)`.
pub fn bundle_diameter(
    tema: &TemaTable,
    tube_count: u32,
    layout: &BundleLayout,
) -> ExchangerResult<Length> {
    layout.check()?;
    if tube_count == 0 {
        return Err(ExchangerError::InvalidArg {
            what: "zero tube count",
        });
    }
    let regression = tema.regression(layout.pattern, layout.passes)?;
    let db = layout.tube_od.value * (f64::from(tube_count) / regression.k1).powf(1.0 / regression.n1);
    Ok(m(db))
}

/// Shell inside diameter for a bundle: inverse of [`shell_to_bundle`].
pub fn shell_diameter(
    tema: &TemaTable,
    bundle: Length,
    head: HeadType,
) -> ExchangerResult<Length> {
    if bundle.value <= 0.0 {
        return Err(ExchangerError::InvalidArg {
            what: "non-positive bundle diameter",
        });
    }
    Ok(m(bundle.value + tema.clearance(head).value))
}
