//! Absolute roughness per pipe material.

use pf_core::units::{Length, mm};

use crate::error::{TableError, TableResult};

const ROUGHNESS_MM: &[(&str, f64)] = &[
    ("carbon-steel", 0.0457),
    ("stainless-steel", 0.015),
    ("galvanized-steel", 0.152),
    ("cast-iron", 0.259),
    ("copper", 0.0015),
    ("pvc", 0.0015),
    ("frp", 0.005),
    ("concrete", 1.0),
];

/// Material name -> absolute roughness lookup.
#[derive(Debug, Clone)]
pub struct RoughnessTable {
    entries: Vec<(String, f64)>,
}

impl RoughnessTable {
    pub fn standard() -> Self {
        Self {
            entries: ROUGHNESS_MM
                .iter()
                .map(|(name, eps)| (name.to_string(), *eps))
                .collect(),
        }
    }

    pub fn resolve(&self, material: &str) -> TableResult<Length> {
        self.entries
            .iter()
            .find(|(name, _)| name == material)
            .map(|(_, eps_mm)| mm(*eps_mm))
            .ok_or_else(|| TableError::UnknownMaterial {
                material: material.to_string(),
            })
    }

    pub fn materials(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}
