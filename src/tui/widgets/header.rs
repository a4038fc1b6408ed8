use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{DateRange, Profile};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    user: Option<&Profile>,
    window: &DateRange,
    source: &str,
) {
    let greeting = match user {
        Some(p) => format!("Hi, {}", p.name),
        None => "Signed out".to_string(),
    };

    let title_line = Line::from(vec![
        Span::styled("  ▲ stride  ", theme::title()),
        Span::styled("Fitness Dashboard", theme::bold()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(greeting, theme::teal()),
    ]);

    let window_line = Line::from(vec![
        Span::styled(
            format!(
                "{} → {}",
                window.start().format("%a %b %d"),
                window.end().format("%a %b %d, %Y")
            ),
            theme::amber(),
        ),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(source, theme::dim()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, window_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
