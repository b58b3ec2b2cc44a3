use ratatui::{
  style::{Color, Modifier, Style},
  widgets::{Block, BorderType, Borders},
};

pub const ACCENT: Color = Color::Rgb(0x9D, 0x4E, 0xDD);

pub fn dim() -> Style {
  Style::default().add_modifier(Modifier::DIM)
}

pub fn friend_tag() -> Style {
  Style::default().fg(ACCENT)
}

pub fn panel<'a>(title: impl Into<ratatui::text::Line<'a>>) -> Block<'a> {
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_type(BorderType::Rounded)
    .border_style(Style::default().fg(ACCENT))
}
