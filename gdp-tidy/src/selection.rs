//! User-editable filter state: which entities to chart and over which periods.
//!
//! The UI owns a [`FilterSelection`] and hands it to
//! [`crate::projection::compute`] on every change. Nothing in this crate
//! mutates it.

use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` period window.
///
/// `min > max` is representable and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRange {
    pub min: i32,
    pub max: i32,
}

impl PeriodRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// True when `period` lies within the window, both ends included.
    pub fn contains(&self, period: i32) -> bool {
        self.min <= period && period <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Move the lower handle, never past the upper one.
    pub fn with_min(&self, min: i32) -> Self {
        Self::new(min.min(self.max), self.max)
    }

    /// Move the upper handle, never below the lower one.
    pub fn with_max(&self, max: i32) -> Self {
        Self::new(self.min, max.max(self.min))
    }

    /// True when every period in `self` is also in `other`.
    pub fn is_within(&self, other: &PeriodRange) -> bool {
        self.is_empty() || (other.min <= self.min && self.max <= other.max)
    }
}

/// Entity names in the order the user picked them, without duplicates.
///
/// Chart legend order follows this order, so it stays stable while the user
/// adds and removes countries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySelection(Vec<String>);

impl EntitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entity` unless it is already selected. Returns true if it was added.
    pub fn insert(&mut self, entity: &str) -> bool {
        if self.contains(entity) {
            return false;
        }
        self.0.push(entity.to_string());
        true
    }

    /// Returns true if `entity` was selected.
    pub fn remove(&mut self, entity: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e != entity);
        self.0.len() != before
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.0.iter().any(|e| e == entity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for EntitySelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for entity in iter {
            selection.insert(entity.as_ref());
        }
        selection
    }
}

/// Both dashboard controls together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub entities: EntitySelection,
    pub period_range: PeriodRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_range_inclusive() {
        let range = PeriodRange::new(1950, 1952);
        assert!(range.contains(1950));
        assert!(range.contains(1952));
        assert!(!range.contains(1949));
        assert!(!range.contains(1953));
    }

    #[test]
    fn test_period_range_inverted_is_empty() {
        let range = PeriodRange::new(2000, 1990);
        assert!(range.is_empty());
        assert!(!range.contains(1995));
        assert!(range.is_within(&PeriodRange::new(0, 1)));
    }

    #[test]
    fn test_period_range_nesting() {
        let outer = PeriodRange::new(1900, 2000);
        assert!(PeriodRange::new(1950, 1960).is_within(&outer));
        assert!(outer.is_within(&outer));
        assert!(!PeriodRange::new(1850, 1960).is_within(&outer));
    }

    #[test]
    fn test_handles_do_not_cross() {
        let range = PeriodRange::new(1900, 1950);
        assert_eq!(range.with_min(1920), PeriodRange::new(1920, 1950));
        assert_eq!(range.with_min(1990), PeriodRange::new(1950, 1950));
        assert_eq!(range.with_max(1800), PeriodRange::new(1900, 1900));
        assert_eq!(range.with_max(2000), PeriodRange::new(1900, 2000));
    }

    #[test]
    fn test_selection_keeps_first_seen_order() {
        let selection: EntitySelection = ["Zimbabwe", "Aland", "Zimbabwe"].into_iter().collect();
        assert_eq!(selection.as_slice(), ["Zimbabwe", "Aland"]);
    }

    #[test]
    fn test_selection_insert_and_remove() {
        let mut selection = EntitySelection::new();
        selection.insert("Aland");
        selection.insert("Zimbabwe");
        assert!(selection.remove("Aland"));
        assert_eq!(selection.as_slice(), ["Zimbabwe"]);
        assert!(!selection.remove("Aland"));
        assert!(selection.insert("Aland"));
        assert!(!selection.insert("Aland"));
        assert_eq!(selection.len(), 2);
    }
}
