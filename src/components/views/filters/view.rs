use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  layout::{Constraint, Layout, Rect},
  text::{Line, Span},
  widgets::Paragraph,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{
  action::Action,
  components::{
    AsyncComponent, Component,
    shared::{InstructionFooter, RangeInput, theme},
  },
  renters::RenterFilter,
  tui::Frame,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FilterField {
  #[default]
  Budget,
  Age,
}

/// Budget and age ranges applied to the renter list.
pub struct FiltersView {
  budget: RangeInput,
  age: RangeInput,
  selected: FilterField,
  editing: bool,
  instruction_footer: InstructionFooter,
}

impl Default for FiltersView {
  fn default() -> Self {
    Self::new()
  }
}

impl FiltersView {
  pub fn new() -> Self {
    FiltersView {
      budget: RangeInput::new("Budget", "Min", "to", "Max", "$"),
      age: RangeInput::new("Age", "Min", "to", "Max", "yrs"),
      selected: FilterField::Budget,
      editing: false,
      instruction_footer: InstructionFooter::default(),
    }
  }

  pub fn filter(&self) -> RenterFilter {
    RenterFilter { budget: self.budget.value(), age: self.age.value() }
  }

  pub fn is_editing(&self) -> bool {
    self.editing
  }

  fn selected_range(&mut self) -> &mut RangeInput {
    match self.selected {
      FilterField::Budget => &mut self.budget,
      FilterField::Age => &mut self.age,
    }
  }

  fn set_editing(&mut self, editing: bool) {
    self.editing = editing;
    self.selected_range().set_active(editing);
  }

  fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
    if self.editing {
      return match key.code {
        KeyCode::Esc | KeyCode::Enter => {
          self.set_editing(false);
          Some(Action::EndInputMode)
        },
        _ => {
          let changed = self.selected_range().handle_key_event(key);
          changed.then(|| Action::FilterChanged(self.filter()))
        },
      };
    }

    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
      return None;
    }
    match key.code {
      KeyCode::Up | KeyCode::Down | KeyCode::Char('j' | 'k') => {
        self.selected = match self.selected {
          FilterField::Budget => FilterField::Age,
          FilterField::Age => FilterField::Budget,
        };
        Some(Action::Render)
      },
      KeyCode::Enter | KeyCode::Char('e' | 'E') => {
        self.set_editing(true);
        Some(Action::StartInputMode)
      },
      KeyCode::Char('c' | 'C') => {
        self.budget.clear();
        self.age.clear();
        debug!("Filters cleared");
        Some(Action::FilterChanged(self.filter()))
      },
      _ => None,
    }
  }

  fn instructions(&self) -> Vec<&'static str> {
    if self.editing {
      vec!["0-9: Type", "Tab: Min/Max", "Enter/Esc: Done"]
    } else {
      vec!["↑/↓: Select", "Enter: Edit", "C: Clear", "Backspace: Back"]
    }
  }

  fn summary(&self) -> Line<'static> {
    let filter = self.filter();
    Line::from(vec![
      Span::styled("Budget: ", theme::dim()),
      Span::raw(filter.budget.describe("$")),
      Span::styled("  Age: ", theme::dim()),
      Span::raw(filter.age.describe("")),
    ])
  }
}

impl Component for FiltersView {
  fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) -> color_eyre::Result<()> {
    Ok(())
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> color_eyre::Result<()> {
    let [budget_area, age_area, summary_area, footer_area] =
      Layout::vertical([Constraint::Length(5), Constraint::Length(5), Constraint::Min(1), Constraint::Length(3)])
        .areas(area);
    self.budget.render(frame, budget_area, self.selected == FilterField::Budget);
    self.age.render(frame, age_area, self.selected == FilterField::Age);
    frame.render_widget(Paragraph::new(self.summary()).block(theme::panel("Active filters")), summary_area);
    self.instruction_footer.render(frame, footer_area, self.instructions());
    Ok(())
  }
}

#[async_trait::async_trait]
impl AsyncComponent for FiltersView {
  async fn handle_events(&mut self, event: Option<crate::tui::Event>) -> color_eyre::Result<Option<Action>> {
    match event {
      Some(crate::tui::Event::Key(key)) => Ok(self.handle_key_event(key)),
      _ => Ok(None),
    }
  }

  async fn update(&mut self, _action: Action) -> color_eyre::Result<Option<Action>> {
    Ok(None)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;
  use crate::renters::NumericRange;

  fn press(view: &mut FiltersView, code: KeyCode) -> Option<Action> {
    view.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn test_enter_starts_and_ends_editing() {
    let mut view = FiltersView::new();

    assert_eq!(press(&mut view, KeyCode::Enter), Some(Action::StartInputMode));
    assert!(view.is_editing());
    assert_eq!(press(&mut view, KeyCode::Esc), Some(Action::EndInputMode));
    assert!(!view.is_editing());
  }

  #[test]
  fn test_typing_emits_filter_changes() {
    let mut view = FiltersView::new();
    press(&mut view, KeyCode::Enter);

    assert_eq!(
      press(&mut view, KeyCode::Char('9')),
      Some(Action::FilterChanged(RenterFilter { budget: NumericRange::new(Some(9), None), ..Default::default() }))
    );
    assert_eq!(press(&mut view, KeyCode::Char('a')), None);
    press(&mut view, KeyCode::Tab);
    press(&mut view, KeyCode::Char('2'));

    assert_eq!(view.filter().budget, NumericRange::new(Some(9), Some(2)));
  }

  #[test]
  fn test_select_age_then_edit() {
    let mut view = FiltersView::new();

    assert_eq!(press(&mut view, KeyCode::Down), Some(Action::Render));
    press(&mut view, KeyCode::Char('e'));
    press(&mut view, KeyCode::Char('3'));
    press(&mut view, KeyCode::Char('0'));

    assert_eq!(view.filter(), RenterFilter { age: NumericRange::new(Some(30), None), ..Default::default() });
  }

  #[test]
  fn test_clear_resets_filters() {
    let mut view = FiltersView::new();
    press(&mut view, KeyCode::Enter);
    press(&mut view, KeyCode::Char('5'));
    press(&mut view, KeyCode::Enter);

    assert_eq!(press(&mut view, KeyCode::Char('c')), Some(Action::FilterChanged(RenterFilter::default())));
  }

  #[test]
  fn test_draw_shows_summary() {
    let mut view = FiltersView::new();
    press(&mut view, KeyCode::Enter);
    press(&mut view, KeyCode::Char('8'));
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

    terminal.draw(|f| view.draw(f, f.area()).unwrap()).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Budget: at least $8"));
    assert!(text.contains("Age: any"));
  }
}
