//! TEMA shell-and-tube bundle constants.
//!
//! Tube-count calculation constants (CTP per pass count, CL per layout),
//! bundle-diameter regression constants (K1, n1) keyed by (pattern,
//! passes), and shell-to-bundle diametral clearances per rear-head type.

use std::fmt;

use pf_core::units::{Length, mm};

use crate::error::{TableError, TableResult};

/// Tube layout pattern (angle between tube rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubePattern {
    Triangular30,
    RotatedTriangular60,
    Square90,
    RotatedSquare45,
}

impl TubePattern {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "triangular-30" => Some(Self::Triangular30),
            "rotated-triangular-60" => Some(Self::RotatedTriangular60),
            "square-90" => Some(Self::Square90),
            "rotated-square-45" => Some(Self::RotatedSquare45),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Triangular30 => "triangular-30",
            Self::RotatedTriangular60 => "rotated-triangular-60",
            Self::Square90 => "square-90",
            Self::RotatedSquare45 => "rotated-square-45",
        }
    }

    fn is_triangular(&self) -> bool {
        matches!(self, Self::Triangular30 | Self::RotatedTriangular60)
    }
}

impl fmt::Display for TubePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rear-head construction, which sets the shell-to-bundle clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadType {
    FixedTubesheet,
    UTube,
    SplitRingFloating,
    PullThroughFloating,
}

impl HeadType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fixed-tubesheet" => Some(Self::FixedTubesheet),
            "u-tube" => Some(Self::UTube),
            "split-ring-floating" => Some(Self::SplitRingFloating),
            "pull-through-floating" => Some(Self::PullThroughFloating),
            _ => None,
        }
    }
}

/// Bundle-diameter regression pair: Db = do * (Nt / K1)^(1/n1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub k1: f64,
    pub n1: f64,
}

const TRIANGULAR_REGRESSION: &[(u32, Regression)] = &[
    (1, Regression { k1: 0.319, n1: 2.142 }),
    (2, Regression { k1: 0.249, n1: 2.207 }),
    (4, Regression { k1: 0.175, n1: 2.285 }),
    (6, Regression { k1: 0.0743, n1: 2.499 }),
    (8, Regression { k1: 0.0365, n1: 2.675 }),
];

const SQUARE_REGRESSION: &[(u32, Regression)] = &[
    (1, Regression { k1: 0.215, n1: 2.207 }),
    (2, Regression { k1: 0.156, n1: 2.291 }),
    (4, Regression { k1: 0.158, n1: 2.263 }),
    (6, Regression { k1: 0.0402, n1: 2.617 }),
    (8, Regression { k1: 0.0331, n1: 2.643 }),
];

/// TEMA constants lookup.
#[derive(Debug, Clone, Default)]
pub struct TemaTable {}

impl TemaTable {
    pub fn standard() -> Self {
        Self {}
    }

    /// Tube-count calculation constant: fraction of the shell circle
    /// usable for tubes, reduced as pass lanes multiply.
    pub fn ctp(&self, passes: u32) -> f64 {
        match passes {
            1 => 0.93,
            2 => 0.90,
            _ => 0.85,
        }
    }

    /// Layout constant: projected area per tube relative to pitch^2.
    pub fn cl(&self, pattern: TubePattern) -> f64 {
        if pattern.is_triangular() { 0.87 } else { 1.0 }
    }

    /// Bundle-diameter regression constants for (pattern, passes).
    pub fn regression(&self, pattern: TubePattern, passes: u32) -> TableResult<Regression> {
        let table = if pattern.is_triangular() {
            TRIANGULAR_REGRESSION
        } else {
            SQUARE_REGRESSION
        };
        table
            .iter()
            .find(|(p, _)| *p == passes)
            .map(|(_, r)| *r)
            .ok_or_else(|| TableError::UnknownBundleLayout {
                pattern: pattern.to_string(),
                passes,
            })
    }

    /// Diametral shell-to-bundle clearance for a rear-head type.
    pub fn clearance(&self, head: HeadType) -> Length {
        let clearance_mm = match head {
            HeadType::FixedTubesheet => 12.7,
            HeadType::UTube => 19.1,
            HeadType::SplitRingFloating => 63.5,
            HeadType::PullThroughFloating => 95.3,
        };
        mm(clearance_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctp_decreases_with_passes() {
        let table = TemaTable::standard();
        assert!(table.ctp(1) > table.ctp(2));
        assert!(table.ctp(2) > table.ctp(4));
        assert_eq!(table.ctp(4), table.ctp(8));
    }

    #[test]
    fn regression_keyed_by_pattern_and_passes() {
        let table = TemaTable::standard();
        let tri = table.regression(TubePattern::Triangular30, 1).unwrap();
        assert_eq!(tri.k1, 0.319);
        let sq = table.regression(TubePattern::Square90, 1).unwrap();
        assert_eq!(sq.k1, 0.215);
        assert!(
            table
                .regression(TubePattern::Triangular30, 3)
                .is_err()
        );
    }

    #[test]
    fn pull_through_needs_most_clearance() {
        let table = TemaTable::standard();
        assert!(
            table.clearance(HeadType::PullThroughFloating).value
                > table.clearance(HeadType::FixedTubesheet).value
        );
    }
}
