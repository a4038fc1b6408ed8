use serde::{Deserialize, Serialize};

use crate::models::MetricKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleShape {
    Binary,
    Progressive,
}

impl RuleShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleShape::Binary => "binary",
            RuleShape::Progressive => "progressive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    #[default]
    AtLeast,
    AtMost,
}

impl Comparison {
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::AtLeast => value >= threshold,
            Comparison::AtMost => value <= threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementRule {
    /// `days` days in a row at or above `threshold`.
    ConsecutiveDays {
        metric: MetricKind,
        threshold: f64,
        days: u32,
    },
    /// Window total reaches `target`.
    Cumulative { metric: MetricKind, target: f64 },
    /// Any one recorded day satisfies the comparison.
    SingleDay {
        metric: MetricKind,
        threshold: f64,
        #[serde(default)]
        comparison: Comparison,
    },
}

impl AchievementRule {
    pub fn metric(&self) -> MetricKind {
        match self {
            AchievementRule::ConsecutiveDays { metric, .. }
            | AchievementRule::Cumulative { metric, .. }
            | AchievementRule::SingleDay { metric, .. } => *metric,
        }
    }

    pub fn supports(&self, shape: RuleShape) -> bool {
        match self {
            AchievementRule::ConsecutiveDays { .. } | AchievementRule::Cumulative { .. } => true,
            AchievementRule::SingleDay { .. } => shape == RuleShape::Binary,
        }
    }
}

/// Achievement as written in the config file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub shape: RuleShape,
    pub rule: AchievementRule,
}

/// Result of evaluating one achievement against a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementOutcome {
    pub id: String,
    pub name: String,
    pub description: String,
    pub shape: RuleShape,
    pub completed: bool,
    /// Always `Some` for progressive achievements, always `None` for binary ones.
    pub progress: Option<f64>,
}
