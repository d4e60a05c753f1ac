//! `summary`: a quick look at what a wide CSV contains.

use anyhow::Context;
use gdp_tidy::selection::PeriodRange;
use gdp_tidy::tidy::TidyTable;
use gdp_tidy::wide::read_wide_path;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub entity_count: usize,
    pub record_count: usize,
    pub period_bounds: Option<PeriodRange>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "entities: {}", self.entity_count)?;
        writeln!(f, "records:  {}", self.record_count)?;
        match self.period_bounds {
            Some(r) => write!(f, "periods:  {}..={}", r.min, r.max),
            None => write!(f, "periods:  none"),
        }
    }
}

/// Load `input` and summarize it.
pub fn run_summary(input: &Path) -> anyhow::Result<Summary> {
    let wide =
        read_wide_path(input).with_context(|| format!("reading {}", input.display()))?;
    let table = TidyTable::load(&wide)?;
    Ok(Summary {
        entity_count: table.entities().len(),
        record_count: table.len(),
        period_bounds: table.period_bounds(),
    })
}
