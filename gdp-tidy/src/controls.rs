//! Initial state for the two dashboard controls.

use crate::selection::{EntitySelection, PeriodRange};
use crate::tidy::TidyTable;
use serde::Serialize;

/// What the UI needs at startup to populate the entity picker and the range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlDefaults {
    /// Distinct entity names, sorted, for the multi-select options
    pub entities: Vec<String>,
    /// Initially selected entities
    pub default_selection: EntitySelection,
    /// Global min/max period, None for an empty table
    pub period_bounds: Option<PeriodRange>,
}

impl ControlDefaults {
    /// Derive control defaults from a loaded table.
    ///
    /// The default selection is `preferred` when the table has it, otherwise
    /// the alphabetically first entity.
    pub fn from_table(table: &TidyTable, preferred: &str) -> Self {
        let entities = table.entities();
        let default_entity = entities
            .iter()
            .find(|e| e.as_str() == preferred)
            .or_else(|| entities.first());

        let mut default_selection = EntitySelection::new();
        if let Some(entity) = default_entity {
            default_selection.insert(entity);
        }

        Self {
            default_selection,
            period_bounds: table.period_bounds(),
            entities,
        }
    }

    /// The range slider starts out spanning every period.
    pub fn default_range(&self) -> Option<PeriodRange> {
        self.period_bounds
    }
}
