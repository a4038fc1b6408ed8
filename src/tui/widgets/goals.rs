use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::GoalProgress;
use crate::tui::theme;
use crate::utils::format::{format_number, progress_bar};

pub fn render(frame: &mut Frame, area: Rect, goals: &[GoalProgress]) {
    let block = Block::default()
        .title(Span::styled(" Goals ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner_width = area.width.saturating_sub(4) as usize;
    let bar_width = inner_width.saturating_sub(8).min(30);

    let mut lines = Vec::new();
    for g in goals {
        let style = if g.is_met() {
            theme::green()
        } else {
            theme::amber()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", g.name), theme::bold()),
            Span::styled(
                format!(
                    "  {} / {} {}",
                    format_number(g.current),
                    format_number(g.target),
                    g.unit
                ),
                theme::dim(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(progress_bar(g.percent / 100.0, bar_width), style),
            Span::styled(format!(" {:>3.0}%", g.percent), style),
        ]));
    }
    if goals.is_empty() {
        lines.push(Line::from(Span::styled("  No goals configured", theme::dim())));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
