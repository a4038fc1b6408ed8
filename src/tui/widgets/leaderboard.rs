use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::LeaderboardEntry;
use crate::tui::theme;
use crate::utils::format::{format_number, pad_display};

pub fn render(frame: &mut Frame, area: Rect, entries: &[LeaderboardEntry], participant_id: &str) {
    let block = Block::default()
        .title(Span::styled(" Leaderboard ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            let is_me = e.participant_id == participant_id;
            let rank_style = match e.rank {
                1 => theme::amber().add_modifier(Modifier::BOLD),
                2 | 3 => theme::teal(),
                _ => theme::dim(),
            };
            let name_style = if is_me {
                theme::teal().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:>2}  ", e.rank), rank_style),
                Span::styled(pad_display(&e.name, 14), name_style),
                Span::styled(
                    format!("{:>8}", format_number(e.total_steps as f64)),
                    theme::dim(),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
