use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::Workout;
use crate::tui::theme;
use crate::utils::format::format_minutes;

pub fn render(frame: &mut Frame, area: Rect, workouts: &[Workout]) {
    let block = Block::default()
        .title(Span::styled(" Recent Activity ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    if workouts.is_empty() {
        let items = vec![ListItem::new(Line::from(Span::styled(
            "  No workouts this week",
            theme::dim(),
        )))];
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = workouts
        .iter()
        .map(|w| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {}  ", w.date.format("%b %d")), theme::dim()),
                Span::styled(format!("{:<16}", w.name), theme::bold()),
                Span::styled(format!("{:>8}", format_minutes(w.duration_min)), theme::dim()),
                Span::styled(format!("  {} kcal", w.calories), theme::coral()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
