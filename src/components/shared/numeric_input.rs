use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Paragraph},
};
use tui_textarea::{CursorMove, Input, TextArea};

use super::theme;
use crate::tui::Frame;

/// Longest accepted value; nine digits always fit in a `u32`.
const MAX_DIGITS: usize = 9;

/// A single-line text box that only accepts digits, shown with an icon adornment such as `$`.
#[derive(Debug)]
pub struct NumericInput {
  text_input: TextArea<'static>,
  label: &'static str,
  icon: &'static str,
  focused: bool,
}

impl NumericInput {
  pub fn new(label: &'static str, icon: &'static str) -> Self {
    let mut input = NumericInput { text_input: TextArea::default(), label, icon, focused: false };
    input.init_style();
    input
  }

  fn init_style(&mut self) {
    self.text_input.set_style(Style::default().fg(Color::White));
    self.text_input.set_cursor_line_style(Style::default());
    self.set_focused(self.focused);
  }

  pub fn set_focused(&mut self, focused: bool) {
    self.focused = focused;
    let cursor = if focused { Style::default().add_modifier(Modifier::REVERSED) } else { Style::default() };
    self.text_input.set_cursor_style(cursor);
  }

  pub fn text(&self) -> &str {
    self.text_input.lines().first().map(|line| line.trim()).unwrap_or_default()
  }

  pub fn value(&self) -> Option<u32> {
    self.text().parse().ok()
  }

  pub fn set_value(&mut self, value: Option<u32>) {
    self.clear();
    if let Some(value) = value {
      self.text_input.insert_str(value.to_string());
    }
  }

  pub fn clear(&mut self) {
    self.text_input.move_cursor(CursorMove::Head);
    self.text_input.delete_line_by_end();
  }

  /// Feeds a key to the box and reports whether the text changed. Non-digits are dropped.
  pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
    if key_event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
      return false;
    }
    match key_event.code {
      KeyCode::Char(c) if c.is_ascii_digit() => {
        if self.text().len() >= MAX_DIGITS {
          return false;
        }
        self.text_input.input(Input::from(key_event))
      },
      KeyCode::Backspace | KeyCode::Delete | KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
        self.text_input.input(Input::from(key_event))
      },
      _ => false,
    }
  }

  pub fn render(&mut self, f: &mut Frame<'_>, area: Rect) {
    let border_style = if self.focused { Style::default().fg(theme::ACCENT) } else { theme::dim() };
    let block = Block::default().borders(Borders::ALL).border_style(border_style).title(self.label);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [icon_area, text_area] =
      Layout::horizontal([Constraint::Length(self.icon.chars().count() as u16 + 1), Constraint::Min(1)]).areas(inner);
    f.render_widget(Paragraph::new(self.icon).style(theme::dim()), icon_area);
    f.render_widget(&self.text_input, text_area);
  }
}
