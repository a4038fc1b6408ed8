use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::AchievementOutcome;
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, achievements: &[AchievementOutcome]) {
    let done = achievements.iter().filter(|a| a.completed).count();
    let block = Block::default()
        .title(Span::styled(
            format!(" Achievements {}/{} ", done, achievements.len()),
            theme::teal(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let items: Vec<ListItem> = achievements
        .iter()
        .map(|a| {
            let (icon, icon_style) = match (a.completed, a.progress) {
                (true, _) => ("★", theme::amber().add_modifier(Modifier::BOLD)),
                (false, Some(_)) => ("◑", theme::teal()),
                (false, None) => ("☆", theme::dim()),
            };
            let name_style = if a.completed {
                theme::bold()
            } else {
                theme::dim()
            };

            let mut first = vec![
                Span::styled(format!("  {} ", icon), icon_style),
                Span::styled(a.name.clone(), name_style),
            ];
            if let (false, Some(p)) = (a.completed, a.progress) {
                first.push(Span::styled(
                    format!("  {} {:.0}%", progress_bar(p / 100.0, 10), p),
                    theme::teal(),
                ));
            }

            ListItem::new(vec![
                Line::from(first),
                Line::from(Span::styled(format!("    {}", a.description), theme::dim())),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
