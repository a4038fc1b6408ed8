use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{DateRange, MetricKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub label: String,
    /// `None` marks a day with no reading for a gap-filled kind.
    pub value: Option<f64>,
}

/// One value per day of the reporting window, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySeries {
    pub kind: MetricKind,
    pub points: Vec<SeriesPoint>,
}

impl WeeklySeries {
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn total(&self) -> f64 {
        self.values().flatten().sum()
    }

    pub fn recorded_days(&self) -> usize {
        self.values().flatten().count()
    }

    pub fn average(&self) -> Option<f64> {
        match self.recorded_days() {
            0 => None,
            n => Some(self.total() / n as f64),
        }
    }

    /// Most recent day that carries a value.
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.iter().rev().find(|p| p.value.is_some())
    }
}

/// Day label used on chart axes: weekday names for a week, dates beyond that.
pub fn day_label(date: NaiveDate, window_len: usize) -> String {
    if window_len <= 7 {
        date.format("%a").to_string()
    } else {
        date.format("%b %d").to_string()
    }
}

/// Every metric kind reduced over the same window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub window: DateRange,
    pub series: BTreeMap<MetricKind, WeeklySeries>,
}

impl MetricSnapshot {
    pub fn get(&self, kind: MetricKind) -> Option<&WeeklySeries> {
        self.series.get(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[Option<f64>]) -> WeeklySeries {
        let start = NaiveDate::from_ymd_opt(2024, 4, 9).unwrap();
        WeeklySeries {
            kind: MetricKind::Weight,
            points: start
                .iter_days()
                .zip(values)
                .map(|(date, value)| SeriesPoint {
                    date,
                    label: day_label(date, values.len()),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn summaries_skip_gaps() {
        let s = series(&[Some(160.0), None, Some(159.0), None]);
        assert_eq!(s.total(), 319.0);
        assert_eq!(s.recorded_days(), 2);
        assert_eq!(s.average(), Some(159.5));
        assert_eq!(s.latest().map(|p| p.value), Some(Some(159.0)));
    }

    #[test]
    fn all_gaps_have_no_average() {
        let s = series(&[None, None]);
        assert_eq!(s.average(), None);
        assert!(s.latest().is_none());
    }

    #[test]
    fn labels_switch_with_window_length() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        assert_eq!(day_label(date, 7), "Mon");
        assert_eq!(day_label(date, 14), "Apr 15");
    }
}
