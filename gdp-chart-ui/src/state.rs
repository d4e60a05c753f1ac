//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The loaded table lives here too, owned by the root component. It is set
//! once after load and only ever read afterwards.

use dioxus::prelude::*;
use gdp_tidy::controls::ControlDefaults;
use gdp_tidy::marks::RangeMark;
use gdp_tidy::selection::{EntitySelection, FilterSelection, PeriodRange};
use gdp_tidy::tidy::TidyTable;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Tidy table (None until loaded)
    pub table: Signal<Option<TidyTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal load error, if any
    pub error_msg: Signal<Option<String>>,
    /// All entity names, sorted, for the picker
    pub entities: Signal<Vec<String>>,
    /// Entities currently charted, in pick order
    pub selected_entities: Signal<EntitySelection>,
    /// Global period bounds of the table
    pub period_bounds: Signal<Option<PeriodRange>>,
    /// Currently selected period window
    pub period_range: Signal<Option<PeriodRange>>,
    /// Slider tick marks
    pub marks: Signal<Vec<RangeMark>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            entities: Signal::new(Vec::new()),
            selected_entities: Signal::new(EntitySelection::new()),
            period_bounds: Signal::new(None),
            period_range: Signal::new(None),
            marks: Signal::new(Vec::new()),
        }
    }

    /// Populate the control signals from freshly computed defaults.
    pub fn apply_defaults(&mut self, defaults: ControlDefaults, marks: Vec<RangeMark>) {
        self.period_range.set(defaults.default_range());
        self.period_bounds.set(defaults.period_bounds);
        self.selected_entities.set(defaults.default_selection);
        self.entities.set(defaults.entities);
        self.marks.set(marks);
    }

    /// Snapshot of both controls, or None before the range is known.
    pub fn filter_selection(&self) -> Option<FilterSelection> {
        let period_range = (self.period_range)()?;
        Some(FilterSelection {
            entities: self.selected_entities.read().clone(),
            period_range,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
