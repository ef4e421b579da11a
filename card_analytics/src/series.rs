//! Monthly time series keyed by month-start dates

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// A monthly aggregate series: month-start date -> value.
///
/// Keys are unique and strictly increasing by construction of the
/// underlying ordered map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySeries {
    points: BTreeMap<NaiveDate, f64>,
}

impl MonthlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from (date, value) pairs; later duplicates of a
    /// date overwrite earlier ones
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self {
            points: pairs.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, date: NaiveDate, value: f64) {
        self.points.insert(date, value);
    }

    pub fn get(&self, date: &NaiveDate) -> Option<f64> {
        self.points.get(date).copied()
    }

    /// Dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.keys().copied().collect()
    }

    /// Values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &f64)> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<(NaiveDate, f64)> {
        self.points.iter().next().map(|(d, v)| (*d, *v))
    }

    pub fn last(&self) -> Option<(NaiveDate, f64)> {
        self.points.iter().next_back().map(|(d, v)| (*d, *v))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_keys_stay_sorted() {
        let series = MonthlySeries::from_pairs([
            (date(2024, 3), 3.0),
            (date(2024, 1), 1.0),
            (date(2024, 2), 2.0),
        ]);

        assert_eq!(
            series.dates(),
            vec![date(2024, 1), date(2024, 2), date(2024, 3)]
        );
        assert_eq!(series.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_first_and_last() {
        let mut series = MonthlySeries::new();
        assert!(series.last().is_none());

        series.insert(date(2023, 12), 9.0);
        series.insert(date(2024, 1), 11.0);

        assert_eq!(series.first(), Some((date(2023, 12), 9.0)));
        assert_eq!(series.last(), Some((date(2024, 1), 11.0)));
    }
}
