use log::info;
use serde::Serialize;

use crate::engine::achievements::{evaluate, Achievement};
use crate::engine::aggregator::{aggregate, Policies};
use crate::engine::leaderboard::rank;
use crate::engine::progress::{compute_progress, current_for};
use crate::engine::projector::{project, project_breakdown};
use crate::engine::wellness::summarize;
use crate::engine::EngineError;
use crate::models::{
    AchievementOutcome, ChartMode, ChartSeries, Dataset, DateRange, Goal, GoalProgress,
    LeaderboardEntry, MetricKind, MetricSnapshot, Wellness, Workout,
};

/// Validated configuration for one dashboard pass.
#[derive(Debug, Clone, Default)]
pub struct DashboardPlan {
    pub policies: Policies,
    pub goals: Vec<Goal>,
    pub achievements: Vec<Achievement>,
}

/// Everything the presentation layer needs, recomputed from the dataset on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub window: DateRange,
    pub snapshot: MetricSnapshot,
    pub goals: Vec<GoalProgress>,
    pub achievements: Vec<AchievementOutcome>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub charts: Vec<ChartSeries>,
    pub calorie_breakdown: Option<ChartSeries>,
    pub workouts: Vec<Workout>,
    pub wellness: Wellness,
}

impl Dashboard {
    pub fn chart(&self, kind: MetricKind) -> Option<&ChartSeries> {
        self.charts
            .iter()
            .find(|c| c.title == kind.display_name())
    }
}

/// Chart type each metric is drawn with by default.
pub fn default_mode(kind: MetricKind) -> ChartMode {
    match kind {
        MetricKind::Weight | MetricKind::Sleep => ChartMode::Line,
        _ => ChartMode::Bar,
    }
}

pub fn build_dashboard(
    dataset: &Dataset,
    plan: &DashboardPlan,
    window: DateRange,
) -> Result<Dashboard, EngineError> {
    let snapshot = aggregate(&dataset.records, window, &plan.policies)?;

    let goals = plan
        .goals
        .iter()
        .map(|goal| compute_progress(goal, current_for(goal, &snapshot)))
        .collect::<Result<Vec<_>, _>>()?;

    let achievements = plan
        .achievements
        .iter()
        .map(|a| evaluate(a, &snapshot))
        .collect();

    let charts = snapshot
        .series
        .values()
        .map(|series| project(series, default_mode(series.kind)))
        .collect();

    let calorie_breakdown = dataset
        .calorie_breakdown
        .as_ref()
        .map(|b| project_breakdown("Calories Consumed", b))
        .transpose()?;
    let wellness = summarize(dataset)?;

    let dashboard = Dashboard {
        window,
        goals,
        achievements,
        leaderboard: rank(&dataset.leaderboard),
        charts,
        calorie_breakdown,
        workouts: recent_workouts(&dataset.workouts, window, usize::MAX),
        wellness,
        snapshot,
    };
    info!(
        "Dashboard built for {}..={} ({} records)",
        window.start(),
        window.end(),
        dataset.records.len()
    );
    Ok(dashboard)
}

/// Workouts inside the window, newest first.
pub fn recent_workouts(workouts: &[Workout], window: DateRange, limit: usize) -> Vec<Workout> {
    let mut inside: Vec<Workout> = workouts
        .iter()
        .filter(|w| window.contains(w.date))
        .cloned()
        .collect();
    inside.sort_by(|a, b| b.date.cmp(&a.date));
    inside.truncate(limit);
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::achievements::configure_all;
    use crate::models::{
        AchievementDef, AchievementRule, Breakdown, BreakdownPart, GoalBasis, MetricRecord,
        Participant, RuleShape, SleepSummary,
    };
    use chrono::{NaiveDate, NaiveTime};

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, n).unwrap()
    }

    fn week() -> DateRange {
        DateRange::ending(day(15), 7).unwrap()
    }

    fn plan() -> DashboardPlan {
        DashboardPlan {
            policies: Policies::default(),
            goals: vec![Goal {
                id: "steps".to_string(),
                name: "Daily Steps".to_string(),
                metric: MetricKind::Steps,
                target: 10000.0,
                unit: "steps".to_string(),
                basis: GoalBasis::Latest,
            }],
            achievements: configure_all(&[AchievementDef {
                id: "streak".to_string(),
                name: "Step Master".to_string(),
                description: "Two days over 10k".to_string(),
                shape: RuleShape::Binary,
                rule: AchievementRule::ConsecutiveDays {
                    metric: MetricKind::Steps,
                    threshold: 10000.0,
                    days: 2,
                },
            }])
            .unwrap(),
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            records: vec![
                MetricRecord::new(day(14), MetricKind::Steps, 11000.0),
                MetricRecord::new(day(15), MetricKind::Steps, 7520.0),
                MetricRecord::new(day(13), MetricKind::Steps, 10200.0),
            ],
            leaderboard: vec![
                Participant::new("1", "Sarah M.", 12456),
                Participant::new("you", "You", 7520),
            ],
            calorie_breakdown: Some(Breakdown {
                total: 1600.0,
                parts: vec![
                    BreakdownPart {
                        name: "Breakfast".to_string(),
                        value: 450.0,
                    },
                    BreakdownPart {
                        name: "Lunch".to_string(),
                        value: 1150.0,
                    },
                ],
            }),
            workouts: vec![
                Workout {
                    date: day(14),
                    name: "Cycling".to_string(),
                    duration_min: 60,
                    calories: 450,
                },
                Workout {
                    date: day(1),
                    name: "Old run".to_string(),
                    duration_min: 30,
                    calories: 300,
                },
                Workout {
                    date: day(15),
                    name: "Running".to_string(),
                    duration_min: 32,
                    calories: 320,
                },
            ],
            ..Dataset::default()
        }
    }

    #[test]
    fn composes_every_component() {
        let window = week();
        let dash = build_dashboard(&dataset(), &plan(), window).unwrap();

        assert_eq!(dash.goals[0].current, 7520.0);
        assert!((dash.goals[0].percent - 75.2).abs() < 1e-9);
        assert!(dash.achievements[0].completed);
        assert_eq!(dash.leaderboard[1].rank, 2);
        assert_eq!(dash.charts.len(), MetricKind::all().len());
        assert_eq!(dash.chart(MetricKind::Weight).unwrap().mode, ChartMode::Line);
        assert_eq!(dash.chart(MetricKind::Steps).unwrap().points.len(), 7);
        assert!(dash.calorie_breakdown.is_some());
        let names: Vec<_> = dash.workouts.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Running", "Cycling"]);
    }

    #[test]
    fn recomputes_when_window_moves() {
        let data = dataset();
        let window = week();
        let today = build_dashboard(&data, &plan(), window).unwrap();
        let yesterday = window.shifted(-1).unwrap();
        let yesterday = build_dashboard(&data, &plan(), yesterday).unwrap();
        assert_eq!(today.goals[0].current, 7520.0);
        assert_eq!(yesterday.goals[0].current, 11000.0);
    }

    #[test]
    fn bad_breakdown_fails_the_pass() {
        let mut data = dataset();
        if let Some(b) = data.calorie_breakdown.as_mut() {
            b.total = 1700.0;
        }
        let err = build_dashboard(&data, &plan(), week()).unwrap_err();
        assert!(matches!(err, EngineError::InconsistentBreakdown { .. }));
    }

    #[test]
    fn sleep_stages_are_checked_like_any_breakdown() {
        let mut data = dataset();
        data.sleep = Some(SleepSummary {
            quality: 85,
            bed_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            stages: Breakdown {
                total: 7.5,
                parts: vec![
                    BreakdownPart {
                        name: "Deep".to_string(),
                        value: 2.5,
                    },
                    BreakdownPart {
                        name: "Light".to_string(),
                        value: 3.5,
                    },
                ],
            },
        });
        let err = build_dashboard(&data, &plan(), week()).unwrap_err();
        assert!(matches!(err, EngineError::InconsistentBreakdown { .. }));

        if let Some(sleep) = data.sleep.as_mut() {
            sleep.stages.parts.push(BreakdownPart {
                name: "REM".to_string(),
                value: 1.5,
            });
        }
        let dash = build_dashboard(&data, &plan(), week()).unwrap();
        let report = dash.wellness.sleep.unwrap();
        assert_eq!(report.hours, 7.5);
        assert_eq!(report.stages.points.len(), 3);
        assert!(dash.wellness.nutrition.is_none());
    }

    #[test]
    fn invalid_goal_fails_the_pass() {
        let mut p = plan();
        p.goals[0].target = 0.0;
        let err = build_dashboard(&dataset(), &p, week()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidGoal { .. }));
    }

    #[test]
    fn workouts_are_limited() {
        let data = dataset();
        let month = DateRange::ending(day(15), 30).unwrap();
        let recent = recent_workouts(&data.workouts, month, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, day(15));
    }
}
