use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MetricRecord, Nutrition, Participant, SleepSummary, WaterLog};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub date: NaiveDate,
    pub name: String,
    pub duration_min: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownPart {
    pub name: String,
    pub value: f64,
}

/// A reported total and the parts it is supposed to be made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub total: f64,
    pub parts: Vec<BreakdownPart>,
}

impl Breakdown {
    pub fn sum(&self) -> f64 {
        self.parts.iter().map(|p| p.value).sum()
    }
}

/// Everything the ingestion side hands over: raw records plus external totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub records: Vec<MetricRecord>,
    #[serde(default)]
    pub leaderboard: Vec<Participant>,
    #[serde(default)]
    pub calorie_breakdown: Option<Breakdown>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub sleep: Option<SleepSummary>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub water: Option<WaterLog>,
}

impl Dataset {
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records
            .iter()
            .map(|r| r.date)
            .chain(self.workouts.iter().map(|w| w.date))
            .max()
    }
}
