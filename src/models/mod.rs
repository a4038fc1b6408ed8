pub mod achievement;
pub mod chart;
pub mod dataset;
pub mod goal;
pub mod leaderboard;
pub mod metric;
pub mod series;
pub mod session;
pub mod wellness;

pub use achievement::{AchievementDef, AchievementOutcome, AchievementRule, Comparison, RuleShape};
pub use chart::{ChartMode, ChartPoint, ChartSeries};
pub use dataset::{Breakdown, BreakdownPart, Dataset, Workout};
pub use goal::{Goal, GoalBasis, GoalProgress};
pub use leaderboard::{LeaderboardEntry, Participant};
pub use metric::{DateRange, FillPolicy, KindPolicy, MetricKind, MetricRecord, Reduction};
pub use series::{MetricSnapshot, SeriesPoint, WeeklySeries};
pub use session::{Profile, Session};
pub use wellness::{
    Macros, Nutrition, NutritionReport, SleepReport, SleepSummary, WaterLog, Wellness,
};
