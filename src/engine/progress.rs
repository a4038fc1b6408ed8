use crate::engine::EngineError;
use crate::models::{Goal, GoalBasis, GoalProgress, MetricSnapshot};

/// Compare `current` against the goal's target. Percent is clamped to 0..=100.
pub fn compute_progress(goal: &Goal, current: f64) -> Result<GoalProgress, EngineError> {
    progress_toward(&goal.id, &goal.name, &goal.unit, current, goal.target)
}

/// Progress toward any positive target, for figures that are not weekly metrics.
pub fn progress_toward(
    id: &str,
    name: &str,
    unit: &str,
    current: f64,
    target: f64,
) -> Result<GoalProgress, EngineError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(EngineError::InvalidGoal {
            goal_id: id.to_string(),
            target,
        });
    }

    let raw = current / target * 100.0;
    let percent = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 100.0) };

    Ok(GoalProgress {
        goal_id: id.to_string(),
        name: name.to_string(),
        unit: unit.to_string(),
        current,
        target,
        percent,
    })
}

/// The goal's current figure, read from its metric's series.
pub fn current_for(goal: &Goal, snapshot: &MetricSnapshot) -> f64 {
    let Some(series) = snapshot.get(goal.metric) else {
        return 0.0;
    };
    match goal.basis {
        GoalBasis::Latest => series.latest().and_then(|p| p.value).unwrap_or(0.0),
        GoalBasis::Total => series.total(),
        GoalBasis::Average => series.average().unwrap_or(0.0),
    }
}
