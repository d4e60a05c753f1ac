//! Projecting the tidy table into chart-ready series.
//!
//! [`compute`] is the whole filter pipeline: keep records whose entity is
//! selected and whose period falls in the range, then group them into one
//! series per selected entity. It never fails. An empty selection gives no
//! series, an unknown entity gives an empty series, and an inverted range
//! gives series with no points.

use crate::selection::{EntitySelection, PeriodRange};
use crate::tidy::TidyTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single (period, value) point on one chart line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub period: i32,
    pub value: f64,
}

/// One chart line: an entity and its points in ascending period order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub entity: String,
    pub points: Vec<Point>,
}

/// Chart title and axis labels, serialized camelCase for the D3 bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl Default for ChartMeta {
    fn default() -> Self {
        Self {
            title: "GDP Per Capita Over Years".to_string(),
            x_axis_label: "Year".to_string(),
            y_axis_label: "GDP Per Capita".to_string(),
        }
    }
}

/// Everything the chart widget needs for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub series: Vec<Series>,
    pub meta: ChartMeta,
}

impl Projection {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Project `table` with the default chart labels.
pub fn compute(table: &TidyTable, entities: &EntitySelection, range: PeriodRange) -> Projection {
    compute_with_meta(table, entities, range, ChartMeta::default())
}

/// Project `table` onto the selected entities and period range.
///
/// Series order equals selection order. Each series is sorted by period
/// (stable), so the output does not depend on how the table happens to be
/// ordered.
pub fn compute_with_meta(
    table: &TidyTable,
    entities: &EntitySelection,
    range: PeriodRange,
    meta: ChartMeta,
) -> Projection {
    let mut series: Vec<Series> = entities
        .iter()
        .map(|entity| Series {
            entity: entity.to_string(),
            points: Vec::new(),
        })
        .collect();

    if !series.is_empty() && !range.is_empty() {
        let slot: HashMap<&str, usize> = entities
            .iter()
            .enumerate()
            .map(|(idx, entity)| (entity, idx))
            .collect();

        for record in table.records() {
            if !range.contains(record.period) {
                continue;
            }
            if let Some(&idx) = slot.get(record.entity.as_str()) {
                series[idx].points.push(Point {
                    period: record.period,
                    value: record.value,
                });
            }
        }

        for s in &mut series {
            s.points.sort_by_key(|p| p.period);
        }
    }

    log::debug!(
        "[GDP] projection: {} series, range {}..={}",
        series.len(),
        range.min,
        range.max
    );
    Projection { series, meta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tidy::TidyRecord;
    use crate::wide::read_wide_str;

    fn table() -> TidyTable {
        let wide = read_wide_str(
            "country,1950,1951,1952\nAland,100,110,120\nZimbabwe,200,210,220\n",
        )
        .unwrap();
        TidyTable::load(&wide).unwrap()
    }

    fn select(names: &[&str]) -> EntitySelection {
        names.iter().collect()
    }

    fn points(pairs: &[(i32, f64)]) -> Vec<Point> {
        pairs
            .iter()
            .map(|&(period, value)| Point { period, value })
            .collect()
    }

    #[test]
    fn test_single_entity_partial_range() {
        let result = compute(&table(), &select(&["Aland"]), PeriodRange::new(1950, 1951));
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.series[0].entity, "Aland");
        assert_eq!(result.series[0].points, points(&[(1950, 100.0), (1951, 110.0)]));
    }

    #[test]
    fn test_range_extending_before_data() {
        let result = compute(
            &table(),
            &select(&["Aland", "Zimbabwe"]),
            PeriodRange::new(1900, 1950),
        );
        assert_eq!(result.series.len(), 2);
        assert_eq!(result.series[0].entity, "Aland");
        assert_eq!(result.series[0].points, points(&[(1950, 100.0)]));
        assert_eq!(result.series[1].entity, "Zimbabwe");
        assert_eq!(result.series[1].points, points(&[(1950, 200.0)]));
    }

    #[test]
    fn test_empty_selection_gives_no_series() {
        let result = compute(&table(), &EntitySelection::new(), PeriodRange::new(1950, 1952));
        assert!(result.series.is_empty());
        assert_eq!(result.meta, ChartMeta::default());
    }

    #[test]
    fn test_unknown_entity_gives_empty_series() {
        let result = compute(
            &table(),
            &select(&["Atlantis", "Aland"]),
            PeriodRange::new(1950, 1952),
        );
        assert_eq!(result.series.len(), 2);
        assert_eq!(result.series[0].entity, "Atlantis");
        assert!(result.series[0].points.is_empty());
        assert_eq!(result.series[1].points.len(), 3);
    }

    #[test]
    fn test_series_follow_selection_order() {
        let result = compute(
            &table(),
            &select(&["Zimbabwe", "Aland"]),
            PeriodRange::new(1950, 1952),
        );
        let order: Vec<&str> = result.series.iter().map(|s| s.entity.as_str()).collect();
        assert_eq!(order, vec!["Zimbabwe", "Aland"]);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let t = table();
        let aland = select(&["Aland"]);
        let exact = compute(&t, &aland, PeriodRange::new(1951, 1951));
        assert_eq!(exact.series[0].points, points(&[(1951, 110.0)]));
        assert!(!exact.series[0].points.iter().any(|p| p.period == 1950));
        assert!(!exact.series[0].points.iter().any(|p| p.period == 1952));

        let ends = compute(&t, &aland, PeriodRange::new(1950, 1952));
        assert_eq!(ends.series[0].points.first().map(|p| p.period), Some(1950));
        assert_eq!(ends.series[0].points.last().map(|p| p.period), Some(1952));
    }

    #[test]
    fn test_inverted_range_is_empty_not_error() {
        let result = compute(&table(), &select(&["Aland"]), PeriodRange::new(1952, 1950));
        assert_eq!(result.series.len(), 1);
        assert!(result.series[0].points.is_empty());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let t = table();
        let sel = select(&["Zimbabwe", "Aland"]);
        let range = PeriodRange::new(1950, 1951);
        assert_eq!(compute(&t, &sel, range), compute(&t, &sel, range));
    }

    #[test]
    fn test_nested_ranges_never_gain_points() {
        let t = table();
        let sel = select(&["Aland", "Zimbabwe", "Atlantis"]);
        let ranges = [
            PeriodRange::new(1900, 2000),
            PeriodRange::new(1950, 1952),
            PeriodRange::new(1950, 1951),
            PeriodRange::new(1951, 1951),
            PeriodRange::new(1952, 1951),
        ];
        for outer in &ranges {
            for inner in ranges.iter().filter(|r| r.is_within(outer)) {
                let big = compute(&t, &sel, *outer);
                let small = compute(&t, &sel, *inner);
                for (s, b) in small.series.iter().zip(&big.series) {
                    assert!(s.points.len() <= b.points.len());
                }
            }
        }
    }

    #[test]
    fn test_cardinality_matches_selection() {
        let t = table();
        for names in [&[][..], &["Aland"][..], &["Aland", "Nowhere", "Zimbabwe"][..]] {
            let result = compute(&t, &select(names), PeriodRange::new(1950, 1952));
            assert_eq!(result.series.len(), names.len());
        }
    }

    #[test]
    fn test_unsorted_table_still_yields_sorted_points() {
        let t = TidyTable::from_records(vec![
            TidyRecord {
                entity: "Aland".into(),
                period: 1952,
                value: 120.0,
            },
            TidyRecord {
                entity: "Aland".into(),
                period: 1950,
                value: 100.0,
            },
            TidyRecord {
                entity: "Aland".into(),
                period: 1951,
                value: 110.0,
            },
        ]);
        let result = compute(&t, &select(&["Aland"]), PeriodRange::new(1950, 1952));
        assert_eq!(
            result.series[0].points,
            points(&[(1950, 100.0), (1951, 110.0), (1952, 120.0)])
        );
    }

    #[test]
    fn test_custom_meta_and_json_shape() {
        let meta = ChartMeta {
            title: "Life".into(),
            x_axis_label: "Year".into(),
            y_axis_label: "Years".into(),
        };
        let result = compute_with_meta(
            &table(),
            &select(&["Aland"]),
            PeriodRange::new(1950, 1950),
            meta,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["meta"]["xAxisLabel"], "Year");
        assert_eq!(json["meta"]["yAxisLabel"], "Years");
        assert_eq!(json["series"][0]["points"][0]["period"], 1950);
        assert_eq!(result.point_count(), 1);
    }
}
