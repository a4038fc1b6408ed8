use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{
    Breakdown, BreakdownPart, Dataset, Macros, MetricKind, MetricRecord, Nutrition, Participant,
    SleepSummary, WaterLog, Workout,
};

const STEPS: [f64; 7] = [8432.0, 10234.0, 9123.0, 7890.0, 10245.0, 8765.0, 7520.0];
const WEIGHT: [f64; 7] = [160.0, 159.5, 159.0, 158.5, 158.0, 158.0, 158.0];
const CALORIES: [f64; 7] = [2100.0, 1950.0, 2300.0, 1800.0, 2250.0, 2050.0, 1850.0];
const ACTIVE: [f64; 7] = [62.0, 45.0, 90.0, 30.0, 75.0, 55.0, 85.0];
// No reading for the two oldest nights
const SLEEP: [Option<f64>; 7] = [None, None, Some(7.2), Some(6.8), Some(8.1), Some(7.5), Some(7.5)];

/// A week of sample data ending on `end`, shaped like a typical tracker export:
/// activity metrics arrive as several records per day, body metrics as one.
pub fn dataset(end: NaiveDate) -> Dataset {
    let day = |i: usize| end - Duration::days(6 - i as i64);
    let mut records = Vec::new();

    for i in 0..7 {
        let date = day(i);
        // Split each activity total into a morning and an evening sync
        for (kind, total) in [
            (MetricKind::Steps, STEPS[i]),
            (MetricKind::Calories, CALORIES[i]),
        ] {
            let morning = (total * 0.4).round();
            records.push(MetricRecord::new(date, kind, morning));
            records.push(MetricRecord::new(date, kind, total - morning));
        }
        records.push(MetricRecord::new(date, MetricKind::Weight, WEIGHT[i]));
        if let Some(hours) = SLEEP[i] {
            records.push(MetricRecord::new(date, MetricKind::Sleep, hours));
        }
        if i < 6 {
            records.push(MetricRecord::new(date, MetricKind::ActiveMinutes, ACTIVE[i]));
        }
    }

    // Hourly active-minute buckets for the last day
    for minutes in [5.0, 15.0, 10.0, 20.0, 5.0, 25.0, 5.0] {
        records.push(MetricRecord::new(end, MetricKind::ActiveMinutes, minutes));
    }

    Dataset {
        records,
        leaderboard: vec![
            Participant::new("sarah", "Sarah M.", 12456),
            Participant::new("john", "John D.", 10982),
            Participant::new("you", "You", 7520),
            Participant::new("mike", "Mike P.", 7102),
            Participant::new("lisa", "Lisa T.", 6843),
        ],
        calorie_breakdown: Some(breakdown(
            1600.0,
            &[("Breakfast", 450.0), ("Lunch", 650.0), ("Dinner", 500.0)],
        )),
        workouts: vec![
            Workout {
                date: end,
                name: "Running".to_string(),
                duration_min: 32,
                calories: 320,
            },
            Workout {
                date: day(5),
                name: "Strength".to_string(),
                duration_min: 45,
                calories: 280,
            },
            Workout {
                date: day(4),
                name: "Cycling".to_string(),
                duration_min: 60,
                calories: 450,
            },
        ],
        // Last night, matching the final sleep reading
        sleep: Some(SleepSummary {
            quality: 85,
            bed_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap_or_default(),
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            stages: breakdown(7.5, &[("Deep", 2.5), ("Light", 3.5), ("REM", 1.5)]),
        }),
        nutrition: Some(Nutrition {
            macros: Macros {
                protein: 150.0,
                carbs: 200.0,
                fat: 70.0,
            },
            meals: breakdown(
                2100.0,
                &[
                    ("Breakfast", 450.0),
                    ("Lunch", 700.0),
                    ("Snack", 200.0),
                    ("Dinner", 750.0),
                ],
            ),
        }),
        water: Some(WaterLog {
            consumed_ml: 1500.0,
            goal_ml: 2500.0,
        }),
    }
}

fn breakdown(total: f64, parts: &[(&str, f64)]) -> Breakdown {
    Breakdown {
        total,
        parts: parts
            .iter()
            .map(|(name, value)| BreakdownPart {
                name: name.to_string(),
                value: *value,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::engine::build_dashboard;
    use crate::models::DateRange;

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 16).unwrap()
    }

    #[test]
    fn demo_builds_with_default_config() {
        let data = dataset(end());
        assert_eq!(data.latest_date(), Some(end()));

        let plan = AppConfig::default().plan().unwrap();
        let window = DateRange::ending(end(), 7).unwrap();
        let dash = build_dashboard(&data, &plan, window).unwrap();

        let steps = dash.snapshot.get(MetricKind::Steps).unwrap();
        let totals: Vec<_> = steps.values().flatten().collect();
        assert_eq!(totals, STEPS.to_vec());
        let active = dash.snapshot.get(MetricKind::ActiveMinutes).unwrap();
        assert_eq!(active.latest().and_then(|p| p.value), Some(85.0));

        assert_eq!(dash.goals[0].current, 7520.0);
        // 10234 / 9123 / 7890 / 10245: no five-day streak
        assert!(!dash.achievements[0].completed);
        assert!(dash.achievements[2].completed);
        assert_eq!(dash.leaderboard[2].participant_id, "you");
        assert_eq!(dash.leaderboard[2].rank, 3);
        assert_eq!(dash.workouts.len(), 3);

        let sleep = dash.wellness.sleep.as_ref().unwrap();
        assert_eq!(sleep.hours, 7.5);
        assert_eq!(sleep.quality, 85);
        let nutrition = dash.wellness.nutrition.as_ref().unwrap();
        assert_eq!(nutrition.calories, 2100.0);
        assert_eq!(nutrition.meals.points.len(), 4);
        let water = dash.wellness.water.as_ref().unwrap();
        assert!((water.percent - 60.0).abs() < 1e-9);
    }
}
