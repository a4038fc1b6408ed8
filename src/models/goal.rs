use serde::{Deserialize, Serialize};

use crate::models::MetricKind;

/// Which figure from the window counts as a goal's "current" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalBasis {
    #[default]
    Latest,
    Total,
    Average,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub metric: MetricKind,
    pub target: f64,
    pub unit: String,
    #[serde(default)]
    pub basis: GoalBasis,
}

/// Derived on every pass, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub unit: String,
    pub current: f64,
    pub target: f64,
    pub percent: f64,
}

impl GoalProgress {
    pub fn is_met(&self) -> bool {
        self.current >= self.target
    }
}
