mod cli;
mod config;
mod data;
mod engine;
mod models;
mod tui;
mod utils;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use data::Source;
use engine::dashboard::Dashboard;
use engine::{build_dashboard, DashboardPlan};
use models::{Dataset, DateRange, Session};

fn main() -> Result<()> {
    env_logger::init();

    let Cli {
        data,
        start,
        end,
        days,
        command,
    } = Cli::parse();
    let flags = Flags {
        data,
        start,
        end,
        days,
    };
    let config = AppConfig::load().context("Loading config")?;

    match command {
        // Config needs neither data nor a valid plan, and never sees --days
        Some(Commands::Config { init }) => handlers::handle_config(&config, init),

        // No subcommand → launch TUI
        None => {
            let ws = Workspace::open(config, flags)?;
            let mut app = tui::app::App::new(
                ws.config,
                Session::signed_out(),
                ws.dataset,
                ws.source,
                ws.plan,
                ws.window,
            );
            tui::app::run(&mut app)
        }

        Some(Commands::Summary) => {
            let ws = Workspace::open(config, flags)?;
            handlers::handle_summary(&ws.dashboard()?, &ws.config, &ws.source)
        }
        Some(Commands::Goals) => {
            handlers::handle_goals(&Workspace::open(config, flags)?.dashboard()?)
        }
        Some(Commands::Achievements) => {
            handlers::handle_achievements(&Workspace::open(config, flags)?.dashboard()?)
        }
        Some(Commands::Leaderboard) => {
            let ws = Workspace::open(config, flags)?;
            handlers::handle_leaderboard(&ws.dashboard()?, &ws.config.dashboard.participant_id)
        }
        Some(Commands::Chart { metric, mode }) => {
            handlers::handle_chart(&Workspace::open(config, flags)?.dashboard()?, &metric, &mode)
        }
        Some(Commands::Breakdown) => {
            handlers::handle_breakdown(&Workspace::open(config, flags)?.dashboard()?)
        }
        Some(Commands::Sleep) => {
            handlers::handle_sleep(&Workspace::open(config, flags)?.dashboard()?)
        }
        Some(Commands::Nutrition) => {
            handlers::handle_nutrition(&Workspace::open(config, flags)?.dashboard()?)
        }
        Some(Commands::Export) => {
            handlers::handle_export(&Workspace::open(config, flags)?.dashboard()?)
        }
    }
}

/// Global flags that pick the dataset and the reporting window.
struct Flags {
    data: Option<PathBuf>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    days: Option<u32>,
}

/// Everything a dashboard pass needs, resolved from config and flags.
struct Workspace {
    config: AppConfig,
    plan: DashboardPlan,
    dataset: Dataset,
    source: Source,
    window: DateRange,
}

impl Workspace {
    fn open(mut config: AppConfig, flags: Flags) -> Result<Self> {
        if let Some(days) = flags.days {
            config.dashboard.window_days = days;
        }
        let plan = config
            .plan()
            .context("Invalid goals or achievements in config")?;

        let today = Local::now().date_naive();
        let data_path = flags.data.or_else(|| config.dashboard.data_path.clone());
        let (dataset, source) = data::resolve(data_path.as_deref(), today)?;

        let end = flags
            .end
            .or_else(|| dataset.latest_date())
            .unwrap_or(today);
        let window = match flags.start {
            Some(start) => DateRange::new(start, end).context("Invalid --start")?,
            None => DateRange::ending(end, config.dashboard.window_days)
                .context("Invalid window length")?,
        };
        log::debug!(
            "Window {}..={} from {}",
            window.start(),
            window.end(),
            source.describe()
        );

        Ok(Self {
            config,
            plan,
            dataset,
            source,
            window,
        })
    }

    fn dashboard(&self) -> Result<Dashboard> {
        build_dashboard(&self.dataset, &self.plan, self.window)
            .with_context(|| format!("Building dashboard from {}", self.source.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(start: Option<NaiveDate>, days: Option<u32>) -> Flags {
        Flags {
            data: None,
            start,
            end: NaiveDate::from_ymd_opt(2024, 4, 16),
            days,
        }
    }

    #[test]
    fn days_flag_shapes_the_window_not_the_loaded_config() {
        let config = AppConfig::default();
        let ws = Workspace::open(config.clone(), flags(None, Some(3))).unwrap();
        assert_eq!(ws.window.len(), 3);
        assert_eq!(ws.window.end(), NaiveDate::from_ymd_opt(2024, 4, 16).unwrap());
        assert_eq!(config.dashboard.window_days, 7);
        assert!(ws.dashboard().is_ok());
    }

    #[test]
    fn oversized_configured_window_is_an_error() {
        let mut config = AppConfig::default();
        config.dashboard.window_days = u32::MAX;
        assert!(Workspace::open(config, flags(None, None)).is_err());
    }

    #[test]
    fn start_after_end_is_an_error() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 20);
        assert!(Workspace::open(AppConfig::default(), flags(start, None)).is_err());
    }
}
