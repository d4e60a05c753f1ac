//! Tick marks for the period range slider.

use serde::Serialize;

/// Label every 50th period by default, matching the Gapminder dashboard.
pub const DEFAULT_MARK_STEP: i32 = 50;

/// One slider tick. Unlabelled ticks still mark a selectable period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeMark {
    pub period: i32,
    pub label: String,
}

/// One mark per distinct period; only multiples of `step` get a label.
///
/// A non-positive `step` yields marks with no labels.
pub fn range_marks(periods: &[i32], step: i32) -> Vec<RangeMark> {
    let mut sorted = periods.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .into_iter()
        .map(|period| RangeMark {
            period,
            label: if step > 0 && period.rem_euclid(step) == 0 {
                period.to_string()
            } else {
                String::new()
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_every_nth_period() {
        let periods: Vec<i32> = (1799..=1901).collect();
        let labelled: Vec<String> = range_marks(&periods, DEFAULT_MARK_STEP)
            .into_iter()
            .filter(|m| !m.label.is_empty())
            .map(|m| m.label)
            .collect();
        assert_eq!(labelled, vec!["1800", "1850", "1900"]);
    }

    #[test]
    fn test_marks_are_sorted_and_distinct() {
        let marks = range_marks(&[1952, 1950, 1952, 1951], 1);
        let periods: Vec<i32> = marks.iter().map(|m| m.period).collect();
        assert_eq!(periods, vec![1950, 1951, 1952]);
        assert!(marks.iter().all(|m| !m.label.is_empty()));
    }

    #[test]
    fn test_non_positive_step_labels_nothing() {
        assert!(range_marks(&[1950, 2000], 0).iter().all(|m| m.label.is_empty()));
        assert!(range_marks(&[1950, 2000], -50).iter().all(|m| m.label.is_empty()));
    }
}
