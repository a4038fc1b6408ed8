use std::collections::HashSet;

use chrono::NaiveDate;
use log::debug;

use crate::engine::EngineError;
use crate::models::{
    AchievementDef, AchievementOutcome, AchievementRule, MetricSnapshot, RuleShape, WeeklySeries,
};

/// An achievement whose rule and shape have been checked against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    def: AchievementDef,
}

impl Achievement {
    pub fn configure(def: AchievementDef) -> Result<Self, EngineError> {
        if !def.rule.supports(def.shape) {
            return Err(EngineError::config(
                &def.id,
                format!("rule cannot report {} progress", def.shape.as_str()),
            ));
        }
        match &def.rule {
            AchievementRule::ConsecutiveDays {
                threshold, days, ..
            } => {
                if *days == 0 {
                    return Err(EngineError::config(&def.id, "days must be at least 1"));
                }
                positive(&def.id, "threshold", *threshold)?;
            }
            AchievementRule::Cumulative { target, .. } => positive(&def.id, "target", *target)?,
            AchievementRule::SingleDay { threshold, .. } => {
                positive(&def.id, "threshold", *threshold)?
            }
        }
        Ok(Self { def })
    }
}

fn positive(id: &str, field: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::config(
            id,
            format!("{} must be greater than zero (got {})", field, value),
        ))
    }
}

/// Validate a whole achievement list; ids must be unique.
pub fn configure_all(defs: &[AchievementDef]) -> Result<Vec<Achievement>, EngineError> {
    let mut seen = HashSet::new();
    defs.iter()
        .map(|def| {
            if !seen.insert(def.id.as_str()) {
                return Err(EngineError::config(&def.id, "duplicate achievement id"));
            }
            Achievement::configure(def.clone())
        })
        .collect()
}

/// A streak of qualifying days inside a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub length: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Longest run of days at or above `threshold`. Gap days break a run, and of
/// several equally long runs the one ending last wins.
pub fn longest_run(series: &WeeklySeries, threshold: f64) -> Option<Run> {
    let mut best: Option<Run> = None;
    let mut current: Option<Run> = None;

    for point in &series.points {
        let qualifies = point.value.is_some_and(|v| v >= threshold);
        if qualifies {
            current = Some(match current {
                Some(run) => Run {
                    length: run.length + 1,
                    end: point.date,
                    ..run
                },
                None => Run {
                    length: 1,
                    start: point.date,
                    end: point.date,
                },
            });
            if let Some(run) = current {
                if best.is_none_or(|b| run.length >= b.length) {
                    best = Some(run);
                }
            }
        } else {
            current = None;
        }
    }
    best
}

pub fn evaluate(achievement: &Achievement, snapshot: &MetricSnapshot) -> AchievementOutcome {
    let def = &achievement.def;
    let series = snapshot.get(def.rule.metric());

    // (completed, ratio toward completion)
    let (completed, ratio) = match (&def.rule, series) {
        (_, None) => (false, 0.0),
        (AchievementRule::ConsecutiveDays { threshold, days, .. }, Some(series)) => {
            let run = longest_run(series, *threshold).map_or(0, |r| r.length);
            (run >= *days, f64::from(run) / f64::from(*days))
        }
        (AchievementRule::Cumulative { target, .. }, Some(series)) => {
            let total = series.total();
            (total >= *target, total / target)
        }
        (
            AchievementRule::SingleDay {
                threshold,
                comparison,
                ..
            },
            Some(series),
        ) => {
            let hit = series.values().flatten().any(|v| comparison.holds(v, *threshold));
            (hit, if hit { 1.0 } else { 0.0 })
        }
    };

    let progress = match def.shape {
        RuleShape::Binary => None,
        RuleShape::Progressive if completed => Some(100.0),
        RuleShape::Progressive => Some((ratio * 100.0).clamp(0.0, 100.0)),
    };
    debug!(
        "Achievement {} evaluated: completed={} progress={:?}",
        def.id, completed, progress
    );

    AchievementOutcome {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.description.clone(),
        shape: def.shape,
        completed,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comparison, DateRange, MetricKind, SeriesPoint};
    use std::collections::BTreeMap;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, n).unwrap()
    }

    fn steps(values: &[Option<f64>]) -> WeeklySeries {
        WeeklySeries {
            kind: MetricKind::Steps,
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| SeriesPoint {
                    date: day(1 + i as u32),
                    label: format!("d{}", i + 1),
                    value: *v,
                })
                .collect(),
        }
    }

    fn snapshot(series: WeeklySeries) -> MetricSnapshot {
        let window = DateRange::new(
            series.points[0].date,
            series.points[series.points.len() - 1].date,
        )
        .unwrap();
        let mut map = BTreeMap::new();
        map.insert(series.kind, series);
        MetricSnapshot {
            window,
            series: map,
        }
    }

    fn def(shape: RuleShape, rule: AchievementRule) -> AchievementDef {
        AchievementDef {
            id: "a".to_string(),
            name: "Step Master".to_string(),
            description: "Reach 10,000 steps for 5 days straight".to_string(),
            shape,
            rule,
        }
    }

    fn streak_rule(days: u32) -> AchievementRule {
        AchievementRule::ConsecutiveDays {
            metric: MetricKind::Steps,
            threshold: 10000.0,
            days,
        }
    }

    #[test]
    fn longest_run_is_true_longest_not_window_count() {
        let s = steps(&[
            Some(11000.0),
            Some(10500.0),
            Some(9800.0),
            Some(10200.0),
            Some(10100.0),
            Some(0.0),
            Some(0.0),
        ]);
        let run = longest_run(&s, 10000.0).unwrap();
        assert_eq!(run.length, 2);
        // days 1-2 and 4-5 tie; the later one wins
        assert_eq!(run.start, day(4));
        assert_eq!(run.end, day(5));
    }

    #[test]
    fn gaps_break_runs() {
        let s = steps(&[Some(12000.0), None, Some(12000.0), Some(12000.0)]);
        assert_eq!(longest_run(&s, 10000.0).unwrap().length, 2);
        assert!(longest_run(&steps(&[None, Some(1.0)]), 10000.0).is_none());
    }

    #[test]
    fn run_uses_supplied_window_only() {
        let s = steps(&[Some(10000.0), Some(10000.0), Some(10000.0)]);
        let a = Achievement::configure(def(RuleShape::Binary, streak_rule(3))).unwrap();
        let out = evaluate(&a, &snapshot(s));
        assert!(out.completed);
        assert_eq!(out.progress, None);
    }

    #[test]
    fn progressive_streak_reports_partial_progress() {
        let s = steps(&[
            Some(11000.0),
            Some(10500.0),
            Some(9800.0),
            Some(10200.0),
            Some(10100.0),
            Some(0.0),
            Some(0.0),
        ]);
        let a = Achievement::configure(def(RuleShape::Progressive, streak_rule(5))).unwrap();
        let out = evaluate(&a, &snapshot(s));
        assert!(!out.completed);
        assert!((out.progress.unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn cumulative_progress_caps_at_hundred() {
        let rule = AchievementRule::Cumulative {
            metric: MetricKind::Steps,
            target: 20000.0,
        };
        let a = Achievement::configure(def(RuleShape::Progressive, rule)).unwrap();

        let partial = evaluate(&a, &snapshot(steps(&[Some(5000.0), None, Some(2000.0)])));
        assert!(!partial.completed);
        assert!((partial.progress.unwrap() - 35.0).abs() < 1e-9);

        let done = evaluate(&a, &snapshot(steps(&[Some(15000.0), Some(15000.0)])));
        assert!(done.completed);
        assert_eq!(done.progress, Some(100.0));
    }

    #[test]
    fn single_day_comparisons() {
        let at_most = AchievementRule::SingleDay {
            metric: MetricKind::Steps,
            threshold: 100.0,
            comparison: Comparison::AtMost,
        };
        let a = Achievement::configure(def(RuleShape::Binary, at_most)).unwrap();
        assert!(evaluate(&a, &snapshot(steps(&[Some(500.0), Some(90.0)]))).completed);
        assert!(!evaluate(&a, &snapshot(steps(&[Some(500.0), None]))).completed);
    }

    #[test]
    fn missing_metric_is_not_completed() {
        let rule = AchievementRule::Cumulative {
            metric: MetricKind::Sleep,
            target: 10.0,
        };
        let a = Achievement::configure(def(RuleShape::Progressive, rule)).unwrap();
        let out = evaluate(&a, &snapshot(steps(&[Some(1.0)])));
        assert!(!out.completed);
        assert_eq!(out.progress, Some(0.0));
    }

    #[test]
    fn shape_mismatch_fails_at_setup() {
        let rule = AchievementRule::SingleDay {
            metric: MetricKind::Sleep,
            threshold: 8.0,
            comparison: Comparison::AtLeast,
        };
        let err = Achievement::configure(def(RuleShape::Progressive, rule)).unwrap_err();
        assert!(matches!(err, EngineError::Configuration { .. }));
    }

    #[test]
    fn invalid_rule_parameters_fail_at_setup() {
        assert!(Achievement::configure(def(RuleShape::Binary, streak_rule(0))).is_err());
        let rule = AchievementRule::Cumulative {
            metric: MetricKind::Steps,
            target: 0.0,
        };
        assert!(Achievement::configure(def(RuleShape::Progressive, rule)).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let d = def(RuleShape::Binary, streak_rule(5));
        let err = configure_all(&[d.clone(), d]).unwrap_err();
        assert_eq!(
            err,
            EngineError::Configuration {
                id: "a".to_string(),
                reason: "duplicate achievement id".to_string()
            }
        );
    }
}
