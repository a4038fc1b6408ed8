pub mod achievements;
pub mod aggregator;
pub mod dashboard;
pub mod error;
pub mod leaderboard;
pub mod progress;
pub mod projector;
pub mod wellness;

pub use achievements::configure_all;
pub use aggregator::Policies;
pub use dashboard::{build_dashboard, DashboardPlan};
pub use error::EngineError;
