//! Core data layer for the GDP per capita dashboard.
//!
//! The source dataset is a wide table: one row per country, one column per
//! year. This crate reshapes it into a tidy `(entity, period, value)` table
//! and projects that table into render-ready chart series for a given
//! entity selection and period range.
//!
//! Nothing here touches the DOM, so the chart apps and the CLI share it.
//!
//! # Usage
//!
//! ```rust
//! use gdp_tidy::projection::compute;
//! use gdp_tidy::selection::{EntitySelection, PeriodRange};
//! use gdp_tidy::tidy::TidyTable;
//! use gdp_tidy::wide::read_wide_str;
//!
//! let wide = read_wide_str("country,1950,1951\nAland,100,110\nZimbabwe,200,\n").unwrap();
//! let table = TidyTable::load(&wide).unwrap();
//! assert_eq!(table.len(), 3);
//!
//! let selection: EntitySelection = ["Aland"].into_iter().collect();
//! let projection = compute(&table, &selection, PeriodRange::new(1950, 1950));
//! assert_eq!(projection.series.len(), 1);
//! assert_eq!(projection.series[0].points.len(), 1);
//! ```

pub mod config;
pub mod controls;
pub mod error;
pub mod marks;
pub mod projection;
pub mod selection;
pub mod tidy;
pub mod wide;

pub use error::{LoadError, Result};
