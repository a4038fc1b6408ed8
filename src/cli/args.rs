use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stride", version, author, about = "A terminal fitness dashboard")]
pub struct Cli {
    /// JSON dataset to load (overrides the config file; demo data when neither is set)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// First day of the reporting window (YYYY-MM-DD); overrides --days
    #[arg(long, global = true)]
    pub start: Option<NaiveDate>,

    /// Last day of the reporting window (YYYY-MM-DD); defaults to the latest record
    #[arg(long, global = true)]
    pub end: Option<NaiveDate>,

    /// Days in the reporting window
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=3660))]
    pub days: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the whole dashboard as text
    Summary,
    /// Show goal progress
    Goals,
    /// Show achievements and their progress
    Achievements,
    /// Show the step leaderboard
    Leaderboard,
    /// Draw one metric's series as an ASCII chart
    Chart {
        /// Metric (steps, sleep, weight, calories, active_minutes)
        metric: String,
        /// Chart mode: bar, line or pie
        #[arg(long, default_value = "bar")]
        mode: String,
    },
    /// Show the calorie breakdown by meal
    Breakdown,
    /// Show last night's sleep stages
    Sleep,
    /// Show today's macros, meals and water intake
    Nutrition,
    /// Print the dashboard as JSON to stdout
    Export,
    /// Show the config path and effective settings
    Config {
        /// Write the default config file
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_must_be_a_sane_window() {
        assert!(Cli::try_parse_from(["stride", "--days", "0", "summary"]).is_err());
        assert!(Cli::try_parse_from(["stride", "--days", "4294967295", "summary"]).is_err());
        let cli = Cli::try_parse_from(["stride", "--days", "14", "summary"]).unwrap();
        assert_eq!(cli.days, Some(14));
    }

    #[test]
    fn global_flags_work_after_the_command() {
        let cli = Cli::try_parse_from(["stride", "config", "--init", "--days", "30"]).unwrap();
        assert_eq!(cli.days, Some(30));
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));
    }
}
