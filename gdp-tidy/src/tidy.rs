//! The tidy (long-format) table: one record per `(entity, period)` observation.

use crate::error::{LoadError, Result};
use crate::selection::PeriodRange;
use crate::wide::WideRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub entity: String,
    pub period: i32,
    pub value: f64,
}

/// Immutable long-format table.
///
/// Built once by [`TidyTable::load`]; replacing the data means building a
/// new table. Records keep source row order, then source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TidyTable {
    records: Vec<TidyRecord>,
}

/// Parse a period column header as a base-10 integer.
pub fn parse_period(label: &str) -> Result<i32> {
    label
        .trim()
        .parse::<i32>()
        .map_err(|_| LoadError::MalformedPeriod {
            label: label.to_string(),
        })
}

impl TidyTable {
    /// Melt wide records into a tidy table.
    ///
    /// Every present cell becomes one record; missing cells produce nothing.
    /// Two columns naming the same period (`1950` and `01950` included) are
    /// rejected. Duplicate entity rows are passed through as-is.
    pub fn load(raw: &[WideRecord]) -> Result<Self> {
        let mut records = Vec::with_capacity(raw.iter().map(|r| r.cells.len()).sum());
        for row in raw {
            let mut seen = BTreeSet::new();
            for cell in &row.cells {
                let period = parse_period(&cell.label)?;
                if !seen.insert(period) {
                    return Err(LoadError::DuplicatePeriod {
                        period,
                        label: cell.label.clone(),
                    });
                }
                if let Some(value) = cell.value {
                    records.push(TidyRecord {
                        entity: row.entity.clone(),
                        period,
                        value,
                    });
                }
            }
        }
        log::info!(
            "[GDP] tidy: loaded {} records from {} entities",
            records.len(),
            raw.len()
        );
        Ok(Self { records })
    }

    /// Wrap already-tidy records, e.g. a synthetic table in a test.
    pub fn from_records(records: Vec<TidyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TidyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct entity names, sorted.
    pub fn entities(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.entity.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct periods, ascending.
    pub fn periods(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.period)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Smallest and largest period observed anywhere, or None for an empty table.
    pub fn period_bounds(&self) -> Option<PeriodRange> {
        let min = self.records.iter().map(|r| r.period).min()?;
        let max = self.records.iter().map(|r| r.period).max()?;
        Some(PeriodRange::new(min, max))
    }
}
