use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::ChartSeries;
use crate::tui::theme;
use crate::utils::format::format_number;

/// Meal breakdown drawn as one stacked bar plus a legend.
pub fn render(frame: &mut Frame, area: Rect, breakdown: Option<&ChartSeries>) {
    let block = Block::default()
        .title(Span::styled(" Calories Consumed ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(chart) = breakdown else {
        let empty = Paragraph::new(Line::from(Span::styled("  No breakdown", theme::dim())))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let total: f64 = chart.points.iter().filter_map(|p| p.value).sum();
    let width = area.width.saturating_sub(6) as usize;

    let mut stacked = vec![Span::styled("  ", theme::dim())];
    let mut legend = Vec::new();
    for (i, p) in chart.points.iter().enumerate() {
        let value = p.value.unwrap_or(0.0);
        let share = if total > 0.0 { value / total } else { 0.0 };
        let color = theme::SLICES[i % theme::SLICES.len()];
        let cells = (share * width as f64).round() as usize;
        stacked.push(Span::styled(
            "█".repeat(cells),
            ratatui::style::Style::default().fg(color),
        ));
        legend.push(Line::from(vec![
            Span::styled("  ● ", ratatui::style::Style::default().fg(color)),
            Span::styled(format!("{:<10}", p.label), theme::bold()),
            Span::styled(
                format!("{:>6} kcal  {:>4.0}%", format_number(value), share * 100.0),
                theme::dim(),
            ),
        ]));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("  Total ", theme::dim()),
            Span::styled(format!("{} kcal", format_number(total)), theme::bold()),
        ]),
        Line::from(stacked),
        Line::from(""),
    ];
    lines.extend(legend);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
