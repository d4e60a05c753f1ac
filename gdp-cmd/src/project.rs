//! `project`: run the chart projection outside the browser.

use anyhow::Context;
use gdp_tidy::config::DashboardConfig;
use gdp_tidy::projection::compute_with_meta;
use gdp_tidy::selection::{EntitySelection, PeriodRange};
use gdp_tidy::tidy::TidyTable;
use gdp_tidy::wide::read_wide_path;
use std::path::Path;

/// Project `input` onto `entities` over `[from, to]` and return pretty JSON.
///
/// Open bounds fall back to the table's own bounds. Unknown entities and
/// empty ranges are not errors; they just produce empty series.
pub fn run_project(
    input: &Path,
    entities: &[String],
    from: Option<i32>,
    to: Option<i32>,
    config: Option<&Path>,
) -> anyhow::Result<String> {
    let config = match config {
        Some(path) => DashboardConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    let wide =
        read_wide_path(input).with_context(|| format!("reading {}", input.display()))?;
    let table = TidyTable::load(&wide)?;

    let bounds = table.period_bounds().unwrap_or(PeriodRange::new(0, 0));
    let range = PeriodRange::new(from.unwrap_or(bounds.min), to.unwrap_or(bounds.max));
    let selection: EntitySelection = entities.iter().collect();

    let projection = compute_with_meta(&table, &selection, range, config.chart_meta());
    log::info!(
        "Projected {} series ({} points) over {}..={}",
        projection.series.len(),
        projection.point_count(),
        range.min,
        range.max
    );
    Ok(serde_json::to_string_pretty(&projection)?)
}
