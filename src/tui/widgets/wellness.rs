use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{ChartSeries, Wellness};
use crate::tui::theme;
use crate::utils::format::{format_number, progress_bar};

/// Last night's sleep, today's nutrition and water, one section each.
pub fn render(frame: &mut Frame, area: Rect, wellness: &Wellness) {
    let block = Block::default()
        .title(Span::styled(" Sleep & Nutrition ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let bar_width = (area.width.saturating_sub(4) as usize).min(24);
    let mut lines = Vec::new();

    if let Some(sleep) = &wellness.sleep {
        lines.push(Line::from(vec![
            Span::styled("  Sleep ", theme::bold()),
            Span::styled(format!("{} h", format_number(sleep.hours)), theme::teal()),
            Span::styled(
                format!(
                    "  quality {}%  {}→{}",
                    sleep.quality,
                    sleep.bed_time.format("%H:%M"),
                    sleep.wake_time.format("%H:%M")
                ),
                theme::dim(),
            ),
        ]));
        lines.push(stacked(&sleep.stages, bar_width));
        lines.push(legend(&sleep.stages, "h"));
    }

    if let Some(n) = &wellness.nutrition {
        lines.push(Line::from(vec![
            Span::styled("  Food  ", theme::bold()),
            Span::styled(format!("{} kcal", format_number(n.calories)), theme::teal()),
            Span::styled(
                format!(
                    "  P {}g  C {}g  F {}g",
                    format_number(n.macros.protein),
                    format_number(n.macros.carbs),
                    format_number(n.macros.fat)
                ),
                theme::dim(),
            ),
        ]));
        lines.push(stacked(&n.meals, bar_width));
        lines.push(legend(&n.meals, ""));
    }

    if let Some(w) = &wellness.water {
        let style = if w.is_met() {
            theme::green()
        } else {
            theme::amber()
        };
        lines.push(Line::from(vec![
            Span::styled("  Water ", theme::bold()),
            Span::styled(progress_bar(w.percent / 100.0, bar_width.saturating_sub(8)), style),
            Span::styled(
                format!(
                    " {}/{} ml",
                    format_number(w.current),
                    format_number(w.target)
                ),
                theme::dim(),
            ),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No sleep or nutrition data",
            theme::dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn stacked(chart: &ChartSeries, width: usize) -> Line<'static> {
    let total: f64 = chart.points.iter().filter_map(|p| p.value).sum();
    let mut spans = vec![Span::raw("  ")];
    for (i, p) in chart.points.iter().enumerate() {
        let share = match p.value {
            Some(v) if total > 0.0 => v / total,
            _ => 0.0,
        };
        let color = theme::SLICES[i % theme::SLICES.len()];
        spans.push(Span::styled(
            "█".repeat((share * width as f64).round() as usize),
            Style::default().fg(color),
        ));
    }
    Line::from(spans)
}

fn legend(chart: &ChartSeries, unit: &str) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, p) in chart.points.iter().enumerate() {
        let color = theme::SLICES[i % theme::SLICES.len()];
        spans.push(Span::styled("● ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!(
                "{} {}{}  ",
                p.label,
                format_number(p.value.unwrap_or(0.0)),
                unit
            ),
            theme::dim(),
        ));
    }
    Line::from(spans)
}
