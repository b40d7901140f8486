//! Pipe schedule dimensions (ASME B36.10M subset).
//!
//! Inside diameters are tabulated in millimeters per (nominal size,
//! schedule). Schedule availability differs per nominal size: schedule
//! 160 stops at 12", STD/XS only start where they diverge from 40/80.

use pf_core::units::{Area, Length, m2, mm};

use crate::error::{TableError, TableResult};

#[derive(Debug, Clone, Copy)]
struct ScheduleEntry {
    nominal: &'static str,
    schedule: &'static str,
    inside_diameter_mm: f64,
}

/// Resolved pipe cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    pub inside_diameter: Length,
    pub area: Area,
}

impl PipeGeometry {
    fn from_id_mm(id_mm: f64) -> Self {
        let d = id_mm / 1000.0;
        Self {
            inside_diameter: mm(id_mm),
            area: m2(std::f64::consts::PI * d * d / 4.0),
        }
    }
}

const B36_10M: &[ScheduleEntry] = &[
    entry("1/2", "40", 15.80),
    entry("1/2", "80", 13.87),
    entry("1/2", "160", 11.78),
    entry("3/4", "40", 20.93),
    entry("3/4", "80", 18.85),
    entry("3/4", "160", 15.55),
    entry("1", "40", 26.64),
    entry("1", "80", 24.31),
    entry("1", "160", 20.70),
    entry("1-1/2", "40", 40.89),
    entry("1-1/2", "80", 38.10),
    entry("1-1/2", "160", 33.98),
    entry("2", "40", 52.50),
    entry("2", "80", 49.25),
    entry("2", "160", 42.85),
    entry("3", "40", 77.93),
    entry("3", "80", 73.66),
    entry("3", "160", 66.64),
    entry("4", "40", 102.26),
    entry("4", "80", 97.18),
    entry("4", "160", 87.32),
    entry("6", "40", 154.05),
    entry("6", "80", 146.33),
    entry("6", "160", 131.78),
    entry("8", "40", 202.72),
    entry("8", "80", 193.68),
    entry("8", "160", 173.08),
    entry("10", "40", 254.51),
    entry("10", "80", 242.87),
    entry("10", "160", 215.90),
    entry("12", "40", 303.23),
    entry("12", "80", 288.89),
    entry("12", "160", 257.16),
    entry("14", "STD", 336.54),
    entry("14", "XS", 330.20),
    entry("14", "40", 333.34),
    entry("14", "80", 317.50),
    entry("16", "STD", 387.34),
    entry("16", "XS", 381.00),
    entry("16", "40", 381.00),
    entry("16", "80", 363.52),
    entry("18", "STD", 438.14),
    entry("18", "XS", 431.80),
    entry("18", "40", 428.66),
    entry("18", "80", 409.54),
    entry("20", "STD", 488.94),
    entry("20", "XS", 482.60),
    entry("20", "40", 477.82),
    entry("20", "80", 455.62),
    entry("24", "STD", 590.54),
    entry("24", "XS", 584.20),
    entry("24", "40", 574.64),
    entry("24", "80", 547.68),
];

const fn entry(
    nominal: &'static str,
    schedule: &'static str,
    inside_diameter_mm: f64,
) -> ScheduleEntry {
    ScheduleEntry {
        nominal,
        schedule,
        inside_diameter_mm,
    }
}

/// Lookup table keyed by (nominal size, schedule).
#[derive(Debug, Clone)]
pub struct PipeScheduleTable {
    entries: Vec<ScheduleEntry>,
}

impl PipeScheduleTable {
    /// The shipped ASME B36.10M data.
    pub fn standard() -> Self {
        Self {
            entries: B36_10M.to_vec(),
        }
    }

    /// Resolve inside diameter and flow area for a nominal size and schedule.
    pub fn resolve(&self, nominal: &str, schedule: &str) -> TableResult<PipeGeometry> {
        self.entries
            .iter()
            .find(|e| e.nominal == nominal && e.schedule == schedule)
            .map(|e| PipeGeometry::from_id_mm(e.inside_diameter_mm))
            .ok_or_else(|| TableError::UnknownGeometry {
                nominal: nominal.to_string(),
                schedule: schedule.to_string(),
            })
    }

    /// Schedules defined for a nominal size, in table order.
    pub fn available_schedules(&self, nominal: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.nominal == nominal)
            .map(|e| e.schedule)
            .collect()
    }

    /// All nominal sizes in the table, deduplicated, in table order.
    pub fn nominal_sizes(&self) -> Vec<&str> {
        let mut sizes: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !sizes.contains(&e.nominal) {
                sizes.push(e.nominal);
            }
        }
        sizes
    }
}

/// Numeric inches for a nominal size label ("1/2", "1-1/2", "6", ...).
///
/// Criteria band selection compares against this value.
pub fn nominal_inches(nominal: &str) -> Option<f64> {
    let s = nominal.trim();
    if let Some((whole, frac)) = s.split_once('-') {
        let whole: f64 = whole.parse().ok()?;
        return Some(whole + parse_fraction(frac)?);
    }
    if s.contains('/') {
        return parse_fraction(s);
    }
    s.parse().ok()
}

fn parse_fraction(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}
