//! Tube-bundle geometry calculation.

use pf_core::convert::QuantityKind;
use pf_core::units::m;
use pf_exchanger::{BundleLayout, bundle_diameter, shell_diameter, shell_to_bundle, tube_count};
use pf_tables::{HeadType, TubePattern};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::input::BundleInput;
use crate::result::BundleResult;
use crate::tables::ReferenceTables;

/// Size the tube field for a shell, and report the regression inverse
/// (bundle and shell diameter for the computed count) alongside.
pub fn calculate_bundle(
    input: &BundleInput,
    tables: &ReferenceTables,
) -> EngineResult<BundleResult> {
    let pattern = TubePattern::from_key(&input.pattern).ok_or_else(|| EngineError::UnknownKey {
        what: "tube pattern",
        key: input.pattern.clone(),
    })?;
    let head = HeadType::from_key(&input.head).ok_or_else(|| EngineError::UnknownKey {
        what: "head type",
        key: input.head.clone(),
    })?;

    let shell_inside = m(input.shell_inside.si(QuantityKind::LengthSmall)?);
    let layout = BundleLayout {
        tube_od: m(input.tube_od.si(QuantityKind::LengthSmall)?),
        pitch: m(input.pitch.si(QuantityKind::LengthSmall)?),
        pattern,
        passes: input.passes,
    };

    let count = tube_count(&tables.tema, shell_inside, head, &layout)?;
    let available = shell_to_bundle(&tables.tema, shell_inside, head)?;
    let regression = bundle_diameter(&tables.tema, count, &layout)?;
    let regression_shell = shell_diameter(&tables.tema, regression, head)?;
    debug!(count, bundle_m = available.value, "bundle sized");

    Ok(BundleResult {
        tube_count: count,
        bundle_diameter_m: available.value,
        regression_bundle_diameter_m: regression.value,
        regression_shell_diameter_m: regression_shell.value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Measurement;

    fn measurement(value: f64, unit: &str) -> Measurement {
        Measurement {
            value,
            unit: unit.into(),
        }
    }

    fn typical() -> BundleInput {
        BundleInput {
            shell_inside: measurement(590.0, "mm"),
            tube_od: measurement(19.05, "mm"),
            pitch: measurement(23.8, "mm"),
            pattern: "triangular-30".into(),
            passes: 1,
            head: "fixed-tubesheet".into(),
        }
    }

    #[test]
    fn typical_exchanger() {
        let tables = ReferenceTables::standard();
        let result = calculate_bundle(&typical(), &tables).unwrap();
        assert!((400..=520).contains(&result.tube_count));
        assert!((result.bundle_diameter_m - 0.5773).abs() < 1e-4);
        // Regression inverse lands near the available bundle
        assert!((result.regression_bundle_diameter_m - result.bundle_diameter_m).abs() < 0.06);
    }

    #[test]
    fn unknown_pattern_rejected() {
        let tables = ReferenceTables::standard();
        let mut input = typical();
        input.pattern = "hexagonal".into();
        assert!(matches!(
            calculate_bundle(&input, &tables),
            Err(EngineError::UnknownKey { .. })
        ));
    }

    #[test]
    fn imperial_units_accepted() {
        let tables = ReferenceTables::standard();
        let mut input = typical();
        input.tube_od = measurement(0.75, "in");
        input.pitch = measurement(0.9375, "in");
        let metric = calculate_bundle(&typical(), &tables).unwrap();
        let imperial = calculate_bundle(&input, &tables).unwrap();
        // 3/4" = 19.05 mm exactly; 15/16" pitch is 23.8125 mm vs 23.8
        let diff = i64::from(metric.tube_count) - i64::from(imperial.tube_count);
        assert!(diff.abs() < 10, "counts {} vs {}", metric.tube_count, imperial.tube_count);
    }
}
