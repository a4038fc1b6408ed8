use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 18, 22);
pub const SURFACE: Color = Color::Rgb(22, 28, 34);
pub const BORDER: Color = Color::Rgb(44, 56, 66);
pub const TEXT: Color = Color::Rgb(220, 228, 232);
pub const TEXT_DIM: Color = Color::Rgb(112, 128, 140);
pub const TEAL: Color = Color::Rgb(64, 176, 166);
pub const GREEN: Color = Color::Rgb(96, 180, 104);
pub const AMBER: Color = Color::Rgb(226, 160, 64);
pub const CORAL: Color = Color::Rgb(228, 110, 92);
pub const BLUE: Color = Color::Rgb(80, 140, 220);

/// Slice colours for breakdown charts, cycled in order
pub const SLICES: [Color; 4] = [BLUE, TEAL, AMBER, CORAL];

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn coral() -> Style {
    Style::default().fg(CORAL)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    teal().add_modifier(Modifier::BOLD)
}
