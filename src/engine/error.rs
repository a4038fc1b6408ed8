use chrono::NaiveDate;
use thiserror::Error;

use crate::models::MetricKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("more than one {kind} record on {date}; configure a reduction to combine them")]
    AmbiguousRecord { kind: MetricKind, date: NaiveDate },

    #[error("goal '{goal_id}' has target {target}; targets must be greater than zero")]
    InvalidGoal { goal_id: String, target: f64 },

    #[error("achievement '{id}': {reason}")]
    Configuration { id: String, reason: String },

    #[error("breakdown parts sum to {sum} but the reported total is {total}")]
    InconsistentBreakdown { total: f64, sum: f64 },

    #[error("window start {start} is after its end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("moving {days} days from {date} leaves the supported calendar")]
    WindowOutOfRange { date: NaiveDate, days: i64 },
}

impl EngineError {
    pub(crate) fn config(id: &str, reason: impl Into<String>) -> Self {
        EngineError::Configuration {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
