use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::engine::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Steps,
    Sleep,
    Weight,
    Calories,
    ActiveMinutes,
}

impl MetricKind {
    pub fn all() -> Vec<MetricKind> {
        vec![
            MetricKind::Steps,
            MetricKind::Sleep,
            MetricKind::Weight,
            MetricKind::Calories,
            MetricKind::ActiveMinutes,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::Sleep => "sleep",
            MetricKind::Weight => "weight",
            MetricKind::Calories => "calories",
            MetricKind::ActiveMinutes => "active_minutes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricKind::Steps => "Steps",
            MetricKind::Sleep => "Sleep",
            MetricKind::Weight => "Weight",
            MetricKind::Calories => "Calories",
            MetricKind::ActiveMinutes => "Active Minutes",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::Sleep => "h",
            MetricKind::Weight => "lb",
            MetricKind::Calories => "kcal",
            MetricKind::ActiveMinutes => "min",
        }
    }

    /// Activity kinds accumulate over a day; point-in-time kinds hold one reading.
    pub fn default_policy(&self) -> KindPolicy {
        match self {
            MetricKind::Steps | MetricKind::Calories | MetricKind::ActiveMinutes => KindPolicy {
                reduction: Reduction::Sum,
                fill: FillPolicy::Zero,
            },
            MetricKind::Sleep | MetricKind::Weight => KindPolicy {
                reduction: Reduction::Single,
                fill: FillPolicy::Gap,
            },
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "steps" => Ok(MetricKind::Steps),
            "sleep" => Ok(MetricKind::Sleep),
            "weight" => Ok(MetricKind::Weight),
            "calories" | "kcal" => Ok(MetricKind::Calories),
            "active_minutes" | "active" => Ok(MetricKind::ActiveMinutes),
            _ => Err(anyhow::anyhow!("Unknown metric kind: {}", s)),
        }
    }
}

/// How several records for the same kind on the same day collapse into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    Sum,
    Latest,
    Single,
}

/// What an absent day looks like in the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    Zero,
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindPolicy {
    pub reduction: Reduction,
    pub fill: FillPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub date: NaiveDate,
    pub kind: MetricKind,
    pub value: f64,
}

impl MetricRecord {
    pub fn new(date: NaiveDate, kind: MetricKind, value: f64) -> Self {
        Self { date, kind, value }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days`-long window finishing on `end`. Zero days is treated as one.
    pub fn ending(end: NaiveDate, days: u32) -> Result<Self, EngineError> {
        let span = i64::from(days.max(1)) - 1;
        let start = end
            .checked_sub_signed(Duration::days(span))
            .ok_or(EngineError::WindowOutOfRange {
                date: end,
                days: -span,
            })?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        std::iter::successors(Some(self.start), |d| d.succ_opt()).take(self.len())
    }

    /// Index of `date` inside the window, if it falls inside it.
    pub fn offset_of(&self, date: NaiveDate) -> Option<usize> {
        if self.contains(date) {
            Some((date - self.start).num_days() as usize)
        } else {
            None
        }
    }

    /// Same length, moved by `days` (negative moves into the past).
    pub fn shifted(&self, days: i64) -> Result<Self, EngineError> {
        let out_of_range = || EngineError::WindowOutOfRange {
            date: self.end,
            days,
        };
        let delta = Duration::try_days(days).ok_or_else(out_of_range)?;
        Ok(Self {
            start: self.start.checked_add_signed(delta).ok_or_else(out_of_range)?,
            end: self.end.checked_add_signed(delta).ok_or_else(out_of_range)?,
        })
    }
}
