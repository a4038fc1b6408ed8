use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme;

/// Sign-in card shown while no one is signed in.
pub fn render(frame: &mut Frame, area: Rect, profile_name: &str) {
    let width = area.width.min(52);
    let height = area.height.min(12);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, card);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("▲ stride", theme::title())),
        Line::from(Span::styled("Track your daily progress", theme::dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme::teal()),
            Span::styled("Sign in as ", theme::dim()),
            Span::styled(profile_name, theme::bold().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("[n]     ", theme::teal()),
            Span::styled("Create an account", theme::dim()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Demo sign-in: nothing is stored or sent anywhere",
            theme::dim(),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(" Sign in ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal())
        .style(theme::surface());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card);
}
