use crate::engine::progress::progress_toward;
use crate::engine::projector::project_breakdown;
use crate::engine::EngineError;
use crate::models::{
    Dataset, GoalProgress, Nutrition, NutritionReport, SleepReport, SleepSummary, WaterLog,
    Wellness,
};

/// Stage split of last night's sleep. The stages must add up to the hours slept.
pub fn sleep_report(sleep: &SleepSummary) -> Result<SleepReport, EngineError> {
    Ok(SleepReport {
        quality: sleep.quality.min(100),
        bed_time: sleep.bed_time,
        wake_time: sleep.wake_time,
        hours: sleep.stages.total,
        stages: project_breakdown("Sleep Stages", &sleep.stages)?,
    })
}

/// Meals must add up to the day's calorie total.
pub fn nutrition_report(nutrition: &Nutrition) -> Result<NutritionReport, EngineError> {
    Ok(NutritionReport {
        macros: nutrition.macros,
        calories: nutrition.meals.total,
        meals: project_breakdown("Meals", &nutrition.meals)?,
    })
}

pub fn water_progress(water: &WaterLog) -> Result<GoalProgress, EngineError> {
    progress_toward("water", "Water Intake", "ml", water.consumed_ml, water.goal_ml)
}

pub fn summarize(dataset: &Dataset) -> Result<Wellness, EngineError> {
    Ok(Wellness {
        sleep: dataset.sleep.as_ref().map(sleep_report).transpose()?,
        nutrition: dataset.nutrition.as_ref().map(nutrition_report).transpose()?,
        water: dataset.water.as_ref().map(water_progress).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Breakdown, BreakdownPart, ChartMode, Macros};
    use chrono::NaiveTime;

    fn parts(total: f64, values: &[(&str, f64)]) -> Breakdown {
        Breakdown {
            total,
            parts: values
                .iter()
                .map(|(name, value)| BreakdownPart {
                    name: name.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    fn night(stages: Breakdown) -> SleepSummary {
        SleepSummary {
            quality: 85,
            bed_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            stages,
        }
    }

    #[test]
    fn sleep_stages_add_up_to_hours_slept() {
        let report = sleep_report(&night(parts(
            7.5,
            &[("Deep", 2.5), ("Light", 3.5), ("REM", 1.5)],
        )))
        .unwrap();
        assert_eq!(report.hours, 7.5);
        assert_eq!(report.quality, 85);
        assert_eq!(report.stages.mode, ChartMode::Pie);
        assert_eq!(report.stages.points.len(), 3);
    }

    #[test]
    fn sleep_stages_that_miss_the_total_are_rejected() {
        let err = sleep_report(&night(parts(
            8.0,
            &[("Deep", 2.5), ("Light", 3.5), ("REM", 1.5)],
        )))
        .unwrap_err();
        assert_eq!(
            err,
            EngineError::InconsistentBreakdown {
                total: 8.0,
                sum: 7.5
            }
        );
    }

    #[test]
    fn meals_are_checked_against_daily_calories() {
        let meals = [
            ("Breakfast", 450.0),
            ("Lunch", 700.0),
            ("Snack", 200.0),
            ("Dinner", 750.0),
        ];
        let macros = Macros {
            protein: 150.0,
            carbs: 200.0,
            fat: 70.0,
        };
        let ok = nutrition_report(&Nutrition {
            macros,
            meals: parts(2100.0, &meals),
        })
        .unwrap();
        assert_eq!(ok.calories, 2100.0);
        assert_eq!(ok.meals.points[3].label, "Dinner");

        let bad = nutrition_report(&Nutrition {
            macros,
            meals: parts(2000.0, &meals),
        });
        assert!(matches!(bad, Err(EngineError::InconsistentBreakdown { .. })));
    }

    #[test]
    fn water_progress_clamps_and_needs_a_goal() {
        let half = water_progress(&WaterLog {
            consumed_ml: 1250.0,
            goal_ml: 2500.0,
        })
        .unwrap();
        assert!((half.percent - 50.0).abs() < 1e-9);

        let over = water_progress(&WaterLog {
            consumed_ml: 3000.0,
            goal_ml: 2500.0,
        })
        .unwrap();
        assert_eq!(over.percent, 100.0);

        let none = water_progress(&WaterLog {
            consumed_ml: 100.0,
            goal_ml: 0.0,
        });
        assert!(matches!(none, Err(EngineError::InvalidGoal { .. })));
    }

    #[test]
    fn missing_panels_stay_empty() {
        assert_eq!(summarize(&Dataset::default()).unwrap(), Wellness::default());
    }
}
