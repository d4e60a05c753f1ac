//! `tidy`: write the melted long-format table as CSV.

use anyhow::Context;
use gdp_tidy::tidy::TidyTable;
use gdp_tidy::wide::read_wide_path;
use std::path::Path;

/// Melt `input` and write `entity,period,value` rows (with header) to `output`.
///
/// Returns the number of records written.
pub fn run_tidy(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let wide =
        read_wide_path(input).with_context(|| format!("reading {}", input.display()))?;
    let table = TidyTable::load(&wide)?;

    let mut wtr = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    for record in table.records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_file;

    #[test]
    fn test_tidy_output() {
        let (dir, input) = sample_file();
        let output = dir.path().join("tidy.csv");
        let written = run_tidy(&input, &output).unwrap();
        assert_eq!(written, 7);

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "entity,period,value");
        assert_eq!(lines[1], "Aland,1950,100.0");
        assert_eq!(lines[7], "Kenya,1951,1500.0");
        assert_eq!(lines.len(), 8);
    }
}
