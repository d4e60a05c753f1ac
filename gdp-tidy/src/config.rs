//! Dashboard text and control configuration.
//!
//! Loaded from TOML. Every field is optional; missing fields fall back to
//! the GDP per capita defaults.
//!
//! ```toml
//! title = "GDP Per Capita Over Years"
//! default_entity = "United States"
//! mark_step = 50
//! ```

use crate::marks::DEFAULT_MARK_STEP;
use crate::projection::ChartMeta;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page heading above the controls
    pub heading: String,
    /// Paragraph under the heading
    pub description: String,
    /// Chart title
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Entity selected when the dashboard first loads
    pub default_entity: String,
    /// Label every Nth period on the range slider
    pub mark_step: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let meta = ChartMeta::default();
        Self {
            heading: "Gapminder GDP per Capita Insights".to_string(),
            description: "The gapminder dataset provides data on GDP per capita trends of each \
                          country since 1800. Select one or more countries to compare their \
                          change in per capita GDP over time."
                .to_string(),
            title: meta.title,
            x_axis_label: meta.x_axis_label,
            y_axis_label: meta.y_axis_label,
            default_entity: "United States".to_string(),
            mark_step: DEFAULT_MARK_STEP,
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Chart labels for [`crate::projection::compute_with_meta`].
    pub fn chart_meta(&self) -> ChartMeta {
        ChartMeta {
            title: self.title.clone(),
            x_axis_label: self.x_axis_label.clone(),
            y_axis_label: self.y_axis_label.clone(),
        }
    }
}
