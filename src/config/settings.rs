use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::{configure_all, DashboardPlan, EngineError, Policies};
use crate::models::{
    AchievementDef, AchievementRule, Comparison, FillPolicy, Goal, GoalBasis, KindPolicy, MetricKind,
    Profile, Reduction, RuleShape,
};

fn default_name() -> String {
    "Alex Smith".to_string()
}
fn default_email() -> String {
    "alex@example.com".to_string()
}
fn default_joined() -> String {
    "March 2025".to_string()
}
fn default_window_days() -> u32 {
    7
}
fn default_participant_id() -> String {
    "you".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_joined")]
    pub joined: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            joined: default_joined(),
        }
    }
}

impl ProfileConfig {
    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            joined: self.joined.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Days in the reporting window, ending on the window's end date
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// JSON dataset to load; the demo data is used when unset
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Leaderboard row that belongs to the signed-in user
    #[serde(default = "default_participant_id")]
    pub participant_id: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            data_path: None,
            participant_id: default_participant_id(),
        }
    }
}

/// Override of a metric kind's reduction/fill policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPolicyConfig {
    pub kind: MetricKind,
    pub reduction: Reduction,
    pub fill: FillPolicy,
}

fn default_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "daily-steps".to_string(),
            name: "Daily Steps".to_string(),
            metric: MetricKind::Steps,
            target: 10000.0,
            unit: "steps".to_string(),
            basis: GoalBasis::Latest,
        },
        Goal {
            id: "calories-burned".to_string(),
            name: "Calories Burned".to_string(),
            metric: MetricKind::Calories,
            target: 2500.0,
            unit: "kcal".to_string(),
            basis: GoalBasis::Latest,
        },
        Goal {
            id: "active-minutes".to_string(),
            name: "Active Minutes".to_string(),
            metric: MetricKind::ActiveMinutes,
            target: 60.0,
            unit: "min".to_string(),
            basis: GoalBasis::Latest,
        },
    ]
}

fn default_achievements() -> Vec<AchievementDef> {
    vec![
        AchievementDef {
            id: "step-master".to_string(),
            name: "Step Master".to_string(),
            description: "Reach 10,000 steps for 5 days straight".to_string(),
            shape: RuleShape::Binary,
            rule: AchievementRule::ConsecutiveDays {
                metric: MetricKind::Steps,
                threshold: 10000.0,
                days: 5,
            },
        },
        AchievementDef {
            id: "marathon-prep".to_string(),
            name: "Marathon Prep".to_string(),
            description: "Walk 100,000 steps in a week".to_string(),
            shape: RuleShape::Progressive,
            rule: AchievementRule::Cumulative {
                metric: MetricKind::Steps,
                target: 100000.0,
            },
        },
        AchievementDef {
            id: "well-rested".to_string(),
            name: "Well Rested".to_string(),
            description: "Sleep at least 8 hours in one night".to_string(),
            shape: RuleShape::Binary,
            rule: AchievementRule::SingleDay {
                metric: MetricKind::Sleep,
                threshold: 8.0,
                comparison: Comparison::AtLeast,
            },
        },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub metrics: Vec<MetricPolicyConfig>,
    #[serde(default = "default_goals")]
    pub goals: Vec<Goal>,
    #[serde(default = "default_achievements")]
    pub achievements: Vec<AchievementDef>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            dashboard: DashboardConfig::default(),
            metrics: Vec::new(),
            goals: default_goals(),
            achievements: default_achievements(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "stride").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn policies(&self) -> Policies {
        self.metrics
            .iter()
            .fold(Policies::default(), |policies, m| {
                policies.with(
                    m.kind,
                    KindPolicy {
                        reduction: m.reduction,
                        fill: m.fill,
                    },
                )
            })
    }

    /// Validates goals and achievements up front so bad config fails before any pass.
    pub fn plan(&self) -> Result<DashboardPlan, EngineError> {
        if let Some(goal) = self
            .goals
            .iter()
            .find(|g| !g.target.is_finite() || g.target <= 0.0)
        {
            return Err(EngineError::InvalidGoal {
                goal_id: goal.id.clone(),
                target: goal.target,
            });
        }
        Ok(DashboardPlan {
            policies: self.policies(),
            goals: self.goals.clone(),
            achievements: configure_all(&self.achievements)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.dashboard.window_days, 7);
        assert_eq!(config.goals.len(), 3);
        assert_eq!(config.achievements.len(), 3);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.profile.name = "Sam".to_string();
        config.dashboard.window_days = 14;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.profile.name, "Sam");
        assert_eq!(loaded.dashboard.window_days, 14);
        assert_eq!(loaded.achievements, config.achievements);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[dashboard]
window_days = 10

[[metrics]]
kind = "weight"
reduction = "latest"
fill = "gap"

[[achievements]]
id = "big-week"
name = "Big Week"
description = "300 active minutes"
shape = "progressive"
rule = { type = "cumulative", metric = "active_minutes", target = 300 }
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.dashboard.window_days, 10);
        assert_eq!(config.dashboard.participant_id, "you");
        assert_eq!(config.profile.name, "Alex Smith");
        assert_eq!(config.goals.len(), 3);
        assert_eq!(config.achievements.len(), 1);
        assert_eq!(
            config.policies().for_kind(MetricKind::Weight),
            KindPolicy {
                reduction: Reduction::Latest,
                fill: FillPolicy::Gap
            }
        );
        assert_eq!(
            config.policies().for_kind(MetricKind::Sleep),
            MetricKind::Sleep.default_policy()
        );
        assert!(config.plan().is_ok());
    }

    #[test]
    fn plan_rejects_bad_config_early() {
        let mut config = AppConfig::default();
        config.achievements[2].shape = RuleShape::Progressive;
        assert!(matches!(
            config.plan(),
            Err(EngineError::Configuration { .. })
        ));

        let mut config = AppConfig::default();
        config.goals[0].target = 0.0;
        assert!(matches!(config.plan(), Err(EngineError::InvalidGoal { .. })));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dashboard = 3").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
