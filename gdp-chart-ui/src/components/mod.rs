//! Reusable Dioxus RSX components for the GDP dashboard.

mod chart_container;
mod chart_header;
mod entity_selector;
mod error_display;
mod loading_spinner;
mod period_range_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use entity_selector::EntitySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use period_range_slider::PeriodRangeSlider;
