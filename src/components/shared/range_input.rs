use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
  layout::{Alignment, Constraint, Layout, Rect},
  style::Style,
  widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{NumericInput, theme};
use crate::{renters::NumericRange, tui::Frame};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
  #[default]
  Min,
  Max,
}

/// Two numeric boxes side by side describing an inclusive range, e.g. `$ [min] to $ [max]`.
#[derive(Debug)]
pub struct RangeInput {
  title: &'static str,
  centre_label: &'static str,
  min: NumericInput,
  max: NumericInput,
  focus: Bound,
  active: bool,
}

impl RangeInput {
  pub fn new(
    title: &'static str,
    min_label: &'static str,
    centre_label: &'static str,
    max_label: &'static str,
    icon: &'static str,
  ) -> Self {
    RangeInput {
      title,
      centre_label,
      min: NumericInput::new(min_label, icon),
      max: NumericInput::new(max_label, icon),
      focus: Bound::Min,
      active: false,
    }
  }

  pub fn value(&self) -> NumericRange {
    NumericRange::new(self.min.value(), self.max.value())
  }

  pub fn set_value(&mut self, range: NumericRange) {
    self.min.set_value(range.min);
    self.max.set_value(range.max);
  }

  pub fn clear(&mut self) {
    self.min.clear();
    self.max.clear();
  }

  pub fn focus(&self) -> Bound {
    self.focus
  }

  /// Marks this range as the one being edited, which shows the cursor in the focused box.
  pub fn set_active(&mut self, active: bool) {
    self.active = active;
    self.sync_focus();
  }

  fn sync_focus(&mut self) {
    self.min.set_focused(self.active && self.focus == Bound::Min);
    self.max.set_focused(self.active && self.focus == Bound::Max);
  }

  /// Routes a key to the focused box; Tab switches boxes. Returns whether the range changed.
  pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
    match key_event.code {
      KeyCode::Tab | KeyCode::BackTab => {
        self.focus = match self.focus {
          Bound::Min => Bound::Max,
          Bound::Max => Bound::Min,
        };
        self.sync_focus();
        false
      },
      _ => match self.focus {
        Bound::Min => self.min.handle_key_event(key_event),
        Bound::Max => self.max.handle_key_event(key_event),
      },
    }
  }

  pub fn render(&mut self, f: &mut Frame<'_>, area: Rect, highlighted: bool) {
    let border_style = if highlighted { Style::default().fg(theme::ACCENT) } else { Style::default() };
    let block =
      Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(border_style).title(self.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [min_area, centre_area, max_area] =
      Layout::horizontal([Constraint::Fill(3), Constraint::Fill(1), Constraint::Fill(3)]).areas(inner);
    self.min.render(f, min_area);
    let [_, label_area, _] =
      Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)]).areas(centre_area);
    f.render_widget(Paragraph::new(self.centre_label).alignment(Alignment::Center).style(theme::dim()), label_area);
    self.max.render(f, max_area);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyModifiers;
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;

  fn press(range: &mut RangeInput, code: KeyCode) -> bool {
    range.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
  }

  fn type_keys(range: &mut RangeInput, keys: &str) {
    for c in keys.chars() {
      press(range, KeyCode::Char(c));
    }
  }

  fn budget() -> RangeInput {
    RangeInput::new("Budget", "Min", "to", "Max", "$")
  }

  #[test]
  fn test_starts_unbounded() {
    assert!(budget().value().is_unbounded());
  }

  #[test]
  fn test_tab_switches_boxes() {
    let mut range = budget();
    type_keys(&mut range, "900");

    assert!(!press(&mut range, KeyCode::Tab));
    assert_eq!(range.focus(), Bound::Max);
    type_keys(&mut range, "1200");

    assert_eq!(range.value(), NumericRange::new(Some(900), Some(1200)));
  }

  #[test]
  fn test_non_digits_do_not_change_range() {
    let mut range = budget();

    assert!(!press(&mut range, KeyCode::Char('x')));
    assert!(press(&mut range, KeyCode::Char('5')));
    assert_eq!(range.value(), NumericRange::new(Some(5), None));
  }

  #[test]
  fn test_clear_and_set_value() {
    let mut range = budget();
    range.set_value(NumericRange::new(None, Some(40)));
    assert_eq!(range.value(), NumericRange::new(None, Some(40)));

    range.clear();
    assert!(range.value().is_unbounded());
  }

  #[test]
  fn test_render_both_boxes_with_icon() {
    let mut range = budget();
    range.set_value(NumericRange::new(Some(900), Some(1200)));
    let mut terminal = Terminal::new(TestBackend::new(50, 5)).unwrap();

    terminal.draw(|f| range.render(f, f.area(), true)).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Budget"));
    assert!(text.contains("$ 900"));
    assert!(text.contains("$ 1200"));
    assert!(text.contains("to"));
  }
}
