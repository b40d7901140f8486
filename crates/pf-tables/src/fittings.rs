//! Fitting loss coefficients (K-factors).
//!
//! Each K multiplies one velocity head. Totals are a plain weighted sum;
//! the pressure-drop integrator applies `sum(K_i * n_i) * rho v^2 / 2`.

use crate::error::{TableError, TableResult};

const K_FACTORS: &[(&str, f64)] = &[
    ("entrance", 0.5),
    ("exit", 1.0),
    ("elbow-90-lr", 0.45),
    ("elbow-90-sr", 0.75),
    ("elbow-45", 0.35),
    ("tee-run", 0.6),
    ("tee-branch", 1.8),
    ("gate-valve", 0.17),
    ("globe-valve", 6.0),
    ("ball-valve", 0.05),
    ("butterfly-valve", 0.86),
    ("swing-check-valve", 2.0),
    ("lift-check-valve", 10.0),
    ("strainer", 2.5),
];

/// Fitting name -> K lookup.
#[derive(Debug, Clone)]
pub struct FittingTable {
    entries: Vec<(String, f64)>,
}

impl FittingTable {
    pub fn standard() -> Self {
        Self {
            entries: K_FACTORS
                .iter()
                .map(|(name, k)| (name.to_string(), *k))
                .collect(),
        }
    }

    pub fn resolve(&self, fitting: &str) -> TableResult<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == fitting)
            .map(|(_, k)| *k)
            .ok_or_else(|| TableError::UnknownFitting {
                fitting: fitting.to_string(),
            })
    }

    /// Sum of K over a (fitting, count) list.
    pub fn total_k(&self, counts: &[(String, u32)]) -> TableResult<f64> {
        let mut total = 0.0;
        for (fitting, count) in counts {
            total += self.resolve(fitting)? * f64::from(*count);
        }
        Ok(total)
    }

    pub fn fittings(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}
