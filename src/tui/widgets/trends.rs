use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{ChartMode, ChartSeries};
use crate::tui::theme;
use crate::utils::format::{format_reading, progress_bar, sparkline};

/// One metric's window, as horizontal bars or as a sparkline with readings.
pub fn render(frame: &mut Frame, area: Rect, chart: &ChartSeries, unit: &str) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} · {} ", chart.title, chart.mode.as_str()),
            theme::teal(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let max = chart
        .points
        .iter()
        .filter_map(|p| p.value)
        .fold(0.0_f64, f64::max);
    let bar_width = (area.width as usize).saturating_sub(26).min(30);

    let lines: Vec<Line> = match chart.mode {
        ChartMode::Line => {
            let values: Vec<Option<f64>> = chart.points.iter().map(|p| p.value).collect();
            let mut lines = vec![Line::from(vec![
                Span::styled("  ", theme::dim()),
                Span::styled(sparkline(&values), theme::teal()),
            ])];
            lines.extend(chart.points.iter().map(|p| {
                Line::from(vec![
                    Span::styled(format!("  {:<7}", p.label), theme::dim()),
                    Span::styled(format_reading(p.value, unit), theme::bold()),
                ])
            }));
            lines
        }
        ChartMode::Bar | ChartMode::Pie => chart
            .points
            .iter()
            .map(|p| {
                let ratio = match p.value {
                    Some(v) if max > 0.0 => v / max,
                    _ => 0.0,
                };
                let style = if p.value.is_some() {
                    theme::teal()
                } else {
                    theme::dim()
                };
                Line::from(vec![
                    Span::styled(format!("  {:<7}", p.label), theme::dim()),
                    Span::styled(progress_bar(ratio, bar_width), style),
                    Span::styled(format!("  {}", format_reading(p.value, unit)), theme::bold()),
                ])
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
