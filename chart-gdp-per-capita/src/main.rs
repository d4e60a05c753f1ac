//! Gapminder GDP per Capita Insights
//!
//! One multi-line chart of GDP per capita, filtered by a country picker and
//! a year range slider.
//!
//! Data flow:
//! 1. `build.rs` copies `gdp_pcap.csv` (wide: one row per country, one
//!    column per year) and `dashboard.toml` into `OUT_DIR`.
//! 2. `include_str!` embeds both into the WASM binary.
//! 3. On mount: read the wide CSV, melt it into a tidy table, and seed the
//!    controls (sorted countries, default country, full year range).
//! 4. On any control change: project the table onto the selection and
//!    re-render via D3.js.

use anyhow::Context;
use dioxus::prelude::*;
use gdp_chart_ui::components::{
    ChartContainer, ChartHeader, EntitySelector, ErrorDisplay, LoadingSpinner, PeriodRangeSlider,
};
use gdp_chart_ui::js_bridge;
use gdp_chart_ui::state::AppState;
use gdp_tidy::config::DashboardConfig;
use gdp_tidy::controls::ControlDefaults;
use gdp_tidy::marks::range_marks;
use gdp_tidy::projection::compute_with_meta;
use gdp_tidy::tidy::TidyTable;
use gdp_tidy::wide::read_wide_str;

/// Wide GDP per capita table, one column per year.
const GDP_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/gdp_pcap.csv"));
/// Dashboard text and defaults.
const DASHBOARD_TOML: &str = include_str!(concat!(env!("OUT_DIR"), "/dashboard.toml"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "gdp-graph";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gdp-per-capita-root"))
        .launch(App);
}

/// Parse the embedded config, falling back to defaults on a bad file.
fn load_config(toml_text: &str) -> DashboardConfig {
    DashboardConfig::from_toml_str(toml_text).unwrap_or_else(|e| {
        log::warn!("Ignoring dashboard.toml: {}", e);
        DashboardConfig::default()
    })
}

/// Read and melt the embedded wide CSV.
fn load_table(csv_data: &str) -> anyhow::Result<TidyTable> {
    let wide = read_wide_str(csv_data).context("reading gdp_pcap.csv")?;
    let table = TidyTable::load(&wide).context("reshaping gdp_pcap.csv")?;
    anyhow::ensure!(!table.is_empty(), "gdp_pcap.csv contains no observations");
    Ok(table)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(|| load_config(DASHBOARD_TOML));

    // ─── Effect 1: Load the table once on mount ───
    let startup_config = config.clone();
    use_effect(move || match load_table(GDP_CSV) {
        Ok(table) => {
            let defaults = ControlDefaults::from_table(&table, &startup_config.default_entity);
            let marks = range_marks(&table.periods(), startup_config.mark_step);
            log::info!(
                "[GDP] loaded {} records, {} countries",
                table.len(),
                defaults.entities.len()
            );
            state.apply_defaults(defaults, marks);
            state.table.set(Some(table));
            state.loading.set(false);
            js_bridge::init_charts();
        }
        Err(e) => {
            log::error!("Failed to load GDP data: {:#}", e);
            state.error_msg.set(Some(format!("{:#}", e)));
            state.loading.set(false);
        }
    });

    // ─── Effect 2: Recompute and redraw on any control change ───
    let meta = config.chart_meta();
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let Some(selection) = state.filter_selection() else {
            return;
        };

        let guard = state.table.read();
        let Some(table) = guard.as_ref() else {
            return;
        };

        let projection = compute_with_meta(
            table,
            &selection.entities,
            selection.period_range,
            meta.clone(),
        );
        log::info!(
            "[GDP] rendering {} series, {} points",
            projection.series.len(),
            projection.point_count()
        );

        js_bridge::render_multi_series_chart(CHART_ID, &projection.series, &projection.meta);
    });

    rsx! {
        div {
            style: "font-family: Arial, sans-serif; background-color: #f0f0f0; margin: 0; padding: 20px;",

            ChartHeader {
                title: config.heading.clone(),
                description: config.description.clone(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                EntitySelector {}
                PeriodRangeSlider {}

                ChartContainer {
                    id: CHART_ID.to_string(),
                    min_height: 400,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = DashboardConfig::from_toml_str(DASHBOARD_TOML).unwrap();
        assert_eq!(config.mark_step, 50);
    }

    #[test]
    fn test_bad_config_falls_back_to_default() {
        assert_eq!(load_config("mark_step = [1]"), DashboardConfig::default());
    }

    #[test]
    fn test_embedded_table_loads_with_default_country() {
        let table = load_table(GDP_CSV).unwrap();
        let defaults = ControlDefaults::from_table(&table, "United States");
        assert_eq!(defaults.default_selection.as_slice(), ["United States"]);
        let bounds = defaults.period_bounds.unwrap();
        assert!(bounds.min <= bounds.max);
    }

    #[test]
    fn test_empty_source_is_an_error() {
        assert!(load_table("").is_err());
        assert!(load_table("country,1950\n").is_err());
    }
}
