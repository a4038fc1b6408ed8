use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::ChartSeries;
use crate::tui::theme;
use crate::utils::format::{format_compact, format_number};

/// Daily steps as a bar chart; days that reach `goal` are drawn green.
pub fn render(frame: &mut Frame, area: Rect, chart: Option<&ChartSeries>, goal: Option<f64>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(chart) = chart.filter(|c| !c.points.is_empty()) else {
        let empty = Paragraph::new(Line::from(Span::styled("  No step data", theme::dim())))
            .block(block.title(Span::styled(" Steps ", theme::teal())));
        frame.render_widget(empty, area);
        return;
    };

    let goal = goal.unwrap_or(f64::INFINITY);
    let bars: Vec<Bar> = chart
        .points
        .iter()
        .map(|p| {
            let value = p.value.unwrap_or(0.0).max(0.0);
            let style = if value >= goal {
                theme::green()
            } else {
                theme::teal()
            };
            Bar::default()
                .value(value.round() as u64)
                .label(Line::from(p.label.clone()))
                .text_value(format_compact(value))
                .style(style)
        })
        .collect();

    let inner = area.width.saturating_sub(2) as usize;
    let n = bars.len().max(1);
    let bar_width = (inner / n).saturating_sub(1).clamp(3, 9) as u16;

    let title = if goal.is_finite() {
        format!(" Steps · goal {} ", format_number(goal))
    } else {
        " Steps ".to_string()
    };

    let barchart = BarChart::default()
        .block(block.title(Span::styled(title, theme::teal())))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(theme::base());

    frame.render_widget(barchart, area);
}
