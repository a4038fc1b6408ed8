use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{Breakdown, ChartSeries, GoalProgress};

/// Last night's sleep as the tracker reports it. `stages.total` is the hours slept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    /// Tracker score, 0-100
    pub quality: u8,
    pub bed_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub stages: Breakdown,
}

/// Grams of each macronutrient eaten today.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Today's intake: macros plus calories per meal, with the day's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub macros: Macros,
    pub meals: Breakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub consumed_ml: f64,
    pub goal_ml: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepReport {
    pub quality: u8,
    pub bed_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub hours: f64,
    pub stages: ChartSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionReport {
    pub macros: Macros,
    pub calories: f64,
    pub meals: ChartSeries,
}

/// Per-day wellness panels that sit beside the weekly series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Wellness {
    pub sleep: Option<SleepReport>,
    pub nutrition: Option<NutritionReport>,
    pub water: Option<GoalProgress>,
}
