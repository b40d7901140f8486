//! Reference tables injected into the engine.

use pf_tables::{CriteriaTable, FittingTable, PipeScheduleTable, RoughnessTable, TemaTable};

/// All lookup tables a calculation may consult.
///
/// Built once at process start and passed by reference; tests inject
/// synthetic tables through the public fields.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub schedules: PipeScheduleTable,
    pub roughness: RoughnessTable,
    pub fittings: FittingTable,
    pub criteria: CriteriaTable,
    pub tema: TemaTable,
}

impl ReferenceTables {
    /// The shipped industry-standard data.
    pub fn standard() -> Self {
        Self {
            schedules: PipeScheduleTable::standard(),
            roughness: RoughnessTable::standard(),
            fittings: FittingTable::standard(),
            criteria: CriteriaTable::standard(),
            tema: TemaTable::standard(),
        }
    }
}
