//! Reading the wide source table.
//!
//! # CSV Format
//!
//! Header row required. The first column is the entity key (its name is not
//! significant; the Gapminder export calls it `country`). Every following
//! column is a period label such as `1950`. Cells hold a decimal number, a
//! Gapminder thousands value like `12.3k`, or a missing marker.
//!
//! ```text
//! country,1950,1951,1952
//! Aland,100,110,120
//! Zimbabwe,200,,220
//! ```
//!
//! Period labels are kept as text here; [`crate::tidy::TidyTable::load`]
//! is where they are parsed and rejected.

use crate::error::{LoadError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell texts treated as "no observation" (compared case-insensitively after trimming).
pub const MISSING_MARKERS: [&str; 6] = ["", "na", "n/a", "nan", "null", "-"];

/// One period column of one wide row.
#[derive(Debug, Clone, PartialEq)]
pub struct WideCell {
    /// Column header, e.g. "1950"
    pub label: String,
    /// None when the source cell was missing
    pub value: Option<f64>,
}

/// One row of the wide table: an entity and its value for every period column.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRecord {
    pub entity: String,
    pub cells: Vec<WideCell>,
}

impl WideRecord {
    /// Build a record from `(label, value)` pairs. Mostly useful in tests.
    pub fn new<L: Into<String>>(
        entity: &str,
        cells: impl IntoIterator<Item = (L, Option<f64>)>,
    ) -> Self {
        Self {
            entity: entity.to_string(),
            cells: cells
                .into_iter()
                .map(|(label, value)| WideCell {
                    label: label.into(),
                    value,
                })
                .collect(),
        }
    }
}

/// Parse one cell. `Ok(None)` for a missing marker, `Err(())` for garbage.
fn parse_cell(raw: &str) -> std::result::Result<Option<f64>, ()> {
    let s = raw.trim();
    if MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }

    let (number, scale) = match s.strip_suffix(['k', 'K']) {
        Some(prefix) => (prefix.trim_end(), 1000.0),
        None => (s, 1.0),
    };

    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v * scale)),
        _ => Err(()),
    }
}

/// Read a wide table from any reader.
///
/// Rows must all have the header's width; a ragged row is a CSV error.
pub fn read_wide_csv<R: Read>(reader: R) -> Result<Vec<WideRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let labels: Vec<String> = rdr
        .headers()?
        .iter()
        .skip(1)
        .map(|h| h.trim().to_string())
        .collect();
    if labels.is_empty() {
        return Err(LoadError::NoPeriodColumns);
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        let entity = row.get(0).unwrap_or("").trim();
        if entity.is_empty() {
            return Err(LoadError::EmptyEntity { row: idx + 1 });
        }

        let mut cells = Vec::with_capacity(labels.len());
        for (label, raw) in labels.iter().zip(row.iter().skip(1)) {
            let value = parse_cell(raw).map_err(|_| LoadError::MalformedValue {
                entity: entity.to_string(),
                label: label.clone(),
                raw: raw.to_string(),
            })?;
            cells.push(WideCell {
                label: label.clone(),
                value,
            });
        }

        records.push(WideRecord {
            entity: entity.to_string(),
            cells,
        });
    }

    log::info!(
        "[GDP] wide: read {} rows x {} period columns",
        records.len(),
        labels.len()
    );
    Ok(records)
}

/// Read a wide table from an in-memory string (e.g. an `include_str!` fixture).
pub fn read_wide_str(csv_data: &str) -> Result<Vec<WideRecord>> {
    read_wide_csv(csv_data.as_bytes())
}

/// Read a wide table from disk. Files ending in `.gz` are decompressed on the fly.
pub fn read_wide_path(path: &Path) -> Result<Vec<WideRecord>> {
    let file = File::open(path)?;
    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if gzipped {
        read_wide_csv(GzDecoder::new(file))
    } else {
        read_wide_csv(file)
    }
}
