//! Additive loss breakdowns.
//!
//! Pipe pressure drops and pump heads are both reported as a list of
//! named physical contributions whose sum is the total. The total is
//! always derived from the parts, so the additive invariant holds by
//! construction.

/// Named contributions in consistent units (Pa for pressure, m for head).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    parts: Vec<(&'static str, f64)>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named contribution. Labels stay in insertion order and
    /// may repeat (e.g. friction on both sides of a pump).
    pub fn push(&mut self, label: &'static str, value: f64) {
        self.parts.push((label, value));
    }

    pub fn parts(&self) -> &[(&'static str, f64)] {
        &self.parts
    }

    /// First contribution with the given label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.parts
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| *value)
    }

    /// Sum of all contributions.
    pub fn total(&self) -> f64 {
        self.parts.iter().map(|(_, value)| value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::sums_to;

    #[test]
    fn total_is_sum_of_parts() {
        let mut breakdown = Breakdown::new();
        breakdown.push("friction", 1_200.0);
        breakdown.push("fittings", 300.0);
        breakdown.push("elevation", -150.0);

        let values: Vec<f64> = breakdown.parts().iter().map(|(_, v)| *v).collect();
        assert!(sums_to(&values, breakdown.total()));
        assert_eq!(breakdown.total(), 1_350.0);
    }

    #[test]
    fn get_finds_first_label() {
        let mut breakdown = Breakdown::new();
        breakdown.push("friction", 2.0);
        breakdown.push("friction", 3.0);
        assert_eq!(breakdown.get("friction"), Some(2.0));
        assert_eq!(breakdown.get("static"), None);
    }
}
