use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::data::Source;
use crate::engine::dashboard::Dashboard;
use crate::engine::projector::project;
use crate::models::{ChartMode, ChartSeries, MetricKind};
use crate::utils::format::{
    format_minutes, format_number, format_reading, pad_display, progress_bar, sparkline,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const TEAL: &str = "\x1b[38;2;64;176;166m";

// ─── Summary ─────────────────────────────────────────────────────────────────

pub fn handle_summary(dash: &Dashboard, config: &AppConfig, source: &Source) -> Result<()> {
    println!();
    println_colored!(TEAL, "  Fitness Dashboard");
    println_colored!(
        DIM,
        "  {} → {}  ·  {}",
        dash.window.start().format("%b %d"),
        dash.window.end().format("%b %d, %Y"),
        source.describe()
    );
    println!();

    for kind in MetricKind::all() {
        if let Some(series) = dash.snapshot.get(kind) {
            let values: Vec<Option<f64>> = series.values().collect();
            let latest = series.latest().and_then(|p| p.value);
            println!(
                "  {:<15} {}  {}",
                kind.display_name(),
                sparkline(&values),
                format_reading(latest, kind.unit())
            );
        }
    }

    handle_goals(dash)?;
    handle_achievements(dash)?;
    handle_leaderboard(dash, &config.dashboard.participant_id)?;
    handle_sleep(dash)?;
    handle_nutrition(dash)?;

    if !dash.workouts.is_empty() {
        println_colored!(TEAL, "  Recent Activity");
        println!();
        for w in dash.workouts.iter().take(5) {
            println!(
                "  {}  {:<16} {:>8}  {} kcal",
                w.date.format("%b %d"),
                w.name,
                format_minutes(w.duration_min),
                w.calories
            );
        }
        println!();
    }
    Ok(())
}

// ─── Goals ───────────────────────────────────────────────────────────────────

pub fn handle_goals(dash: &Dashboard) -> Result<()> {
    println!();
    println_colored!(TEAL, "  Goals");
    println!();
    if dash.goals.is_empty() {
        println_colored!(DIM, "  No goals configured.");
    }
    for g in &dash.goals {
        let color = if g.is_met() { GREEN } else { AMBER };
        println_colored!(
            color,
            "  {:<18} {}  {:>5.1}%  {} / {} {}",
            g.name,
            progress_bar(g.percent / 100.0, 20),
            g.percent,
            format_number(g.current),
            format_number(g.target),
            g.unit
        );
    }
    println!();
    Ok(())
}

// ─── Achievements ────────────────────────────────────────────────────────────

pub fn handle_achievements(dash: &Dashboard) -> Result<()> {
    println_colored!(TEAL, "  Achievements");
    println!();
    for a in &dash.achievements {
        if a.completed {
            println_colored!(GREEN, "  ✓ {:<16} {}", a.name, a.description);
        } else if let Some(p) = a.progress {
            println_colored!(
                AMBER,
                "  ◑ {:<16} {}  {} {:.0}%",
                a.name,
                a.description,
                progress_bar(p / 100.0, 10),
                p
            );
        } else {
            println_colored!(DIM, "  ○ {:<16} {}", a.name, a.description);
        }
    }
    println!();
    Ok(())
}

// ─── Leaderboard ─────────────────────────────────────────────────────────────

pub fn handle_leaderboard(dash: &Dashboard, participant_id: &str) -> Result<()> {
    println_colored!(TEAL, "  Leaderboard");
    println!();
    for e in &dash.leaderboard {
        let line = format!(
            "  #{:<3} {}  {:>8} steps",
            e.rank,
            pad_display(&e.name, 16),
            format_number(e.total_steps as f64)
        );
        if e.participant_id == participant_id {
            println_colored!(BOLD, "{}  ← you", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Charts ──────────────────────────────────────────────────────────────────

pub fn handle_chart(dash: &Dashboard, metric: &str, mode: &str) -> Result<()> {
    let kind: MetricKind = metric.parse()?;
    let mode: ChartMode = mode.parse()?;
    let series = dash
        .snapshot
        .get(kind)
        .with_context(|| format!("No series for {}", kind))?;
    let chart = project(series, mode);

    println!();
    println_colored!(TEAL, "  {} ({})", chart.title, kind.unit());
    println!();
    print_chart(&chart, kind.unit());
    println!();
    Ok(())
}

pub fn handle_breakdown(dash: &Dashboard) -> Result<()> {
    println!();
    match &dash.calorie_breakdown {
        Some(chart) => {
            println_colored!(TEAL, "  {}", chart.title);
            println!();
            print_chart(chart, "kcal");
        }
        None => println_colored!(DIM, "  No calorie breakdown in this dataset."),
    }
    println!();
    Ok(())
}

// ─── Sleep & nutrition ───────────────────────────────────────────────────────

pub fn handle_sleep(dash: &Dashboard) -> Result<()> {
    println!();
    let Some(sleep) = &dash.wellness.sleep else {
        println_colored!(DIM, "  No sleep analysis in this dataset.");
        println!();
        return Ok(());
    };
    println_colored!(TEAL, "  Sleep Analysis");
    println!();
    println!(
        "  {} h slept  ·  quality {}%  ·  {} → {}",
        format_number(sleep.hours),
        sleep.quality,
        sleep.bed_time.format("%H:%M"),
        sleep.wake_time.format("%H:%M")
    );
    println!();
    print_chart(&sleep.stages, "h");
    println!();
    Ok(())
}

pub fn handle_nutrition(dash: &Dashboard) -> Result<()> {
    println!();
    match &dash.wellness.nutrition {
        Some(n) => {
            println_colored!(TEAL, "  Nutrition  ·  {} kcal", format_number(n.calories));
            println!();
            println!(
                "  Protein {} g  ·  Carbs {} g  ·  Fat {} g",
                format_number(n.macros.protein),
                format_number(n.macros.carbs),
                format_number(n.macros.fat)
            );
            println!();
            print_chart(&n.meals, "kcal");
        }
        None => println_colored!(DIM, "  No nutrition summary in this dataset."),
    }
    println!();
    if let Some(w) = &dash.wellness.water {
        let color = if w.is_met() { GREEN } else { AMBER };
        println_colored!(
            color,
            "  Water {}  {} / {} ml",
            progress_bar(w.percent / 100.0, 20),
            format_number(w.current),
            format_number(w.target)
        );
        println!();
    }
    Ok(())
}

fn print_chart(chart: &ChartSeries, unit: &str) {
    match chart.mode {
        ChartMode::Bar => {
            let max = chart
                .points
                .iter()
                .filter_map(|p| p.value)
                .fold(0.0_f64, f64::max);
            for p in &chart.points {
                let ratio = match (p.value, max > 0.0) {
                    (Some(v), true) => v / max,
                    _ => 0.0,
                };
                println!(
                    "  {:<7} {}  {}",
                    p.label,
                    progress_bar(ratio, 30),
                    format_reading(p.value, unit)
                );
            }
        }
        ChartMode::Line => {
            let values: Vec<Option<f64>> = chart.points.iter().map(|p| p.value).collect();
            println!("  {}", sparkline(&values));
            println!();
            for (label, value) in chart.pairs() {
                println!("  {:<7} {}", label, format_reading(value, unit));
            }
        }
        ChartMode::Pie => {
            let total: f64 = chart.points.iter().filter_map(|p| p.value).sum();
            for p in &chart.points {
                let share = match p.value {
                    Some(v) if total > 0.0 => v / total,
                    _ => 0.0,
                };
                println!(
                    "  {:<10} {}  {:>5.1}%  {}",
                    p.label,
                    progress_bar(share, 20),
                    share * 100.0,
                    format_reading(p.value, unit)
                );
            }
            println_colored!(DIM, "  total {}", format_reading(Some(total), unit));
        }
    }
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(dash: &Dashboard) -> Result<()> {
    let json = serde_json::to_string_pretty(dash).context("Serializing dashboard")?;
    println!("{}", json);
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    if init {
        let path = config.save()?;
        println_colored!(GREEN, "  ✓ Wrote {}", path.display());
        return Ok(());
    }
    let path = AppConfig::config_path()?;
    let state = if path.exists() { "" } else { " (not created, using defaults)" };
    println_colored!(DIM, "# {}{}", path.display(), state);
    let content = toml::to_string_pretty(config).context("Serializing config")?;
    println!("{}", content);
    Ok(())
}
