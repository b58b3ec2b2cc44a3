use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style},
  widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::theme;
use crate::{
  action::Action,
  components::{AsyncComponent, Component},
  navigation::{Navigator, Page},
  tui::Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
  pub destination: Page,
  pub text: String,
  pub strong: bool,
}

impl NavButton {
  pub fn new(destination: Page, text: impl Into<String>, strong: bool) -> Self {
    NavButton { destination, text: text.into(), strong }
  }

  pub fn activate(&self, navigator: &mut dyn Navigator) {
    navigator.push(self.destination);
  }

  fn style(&self, current: bool) -> Style {
    let mut style = if current { Style::default().fg(theme::ACCENT) } else { Style::default() };
    if self.strong {
      style = style.add_modifier(Modifier::BOLD);
    }
    style
  }
}

/// A row of page buttons over a shared history. Digit keys activate buttons in order.
pub struct NavBar {
  buttons: Vec<NavButton>,
  navigator: Box<dyn Navigator + Send + Sync>,
}

impl NavBar {
  pub fn new(navigator: Box<dyn Navigator + Send + Sync>, buttons: Vec<NavButton>) -> Self {
    NavBar { buttons, navigator }
  }

  pub fn current(&self) -> Page {
    self.navigator.current()
  }

  fn button_for_key(&self, c: char) -> Option<&NavButton> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    self.buttons.get(index)
  }

  fn navigate(&mut self, destination: Page) -> bool {
    let before = self.navigator.current();
    match self.buttons.iter().find(|button| button.destination == destination) {
      Some(button) => button.activate(self.navigator.as_mut()),
      None => {
        warn!("No navigation button for {}", destination);
        return false;
      },
    }
    before != self.navigator.current()
  }
}

impl Component for NavBar {
  fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) -> color_eyre::Result<()> {
    Ok(())
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> color_eyre::Result<()> {
    if self.buttons.is_empty() {
      return Ok(());
    }
    let current = self.navigator.current();
    let areas = Layout::horizontal(self.buttons.iter().map(|_| Constraint::Fill(1))).split(area);
    for (index, (button, button_area)) in self.buttons.iter().zip(areas.iter()).enumerate() {
      let is_current = button.destination == current;
      let border_style = if is_current { Style::default().fg(theme::ACCENT) } else { theme::dim() };
      let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(border_style);
      let paragraph = Paragraph::new(format!("{} {}", index + 1, button.text))
        .alignment(Alignment::Center)
        .style(button.style(is_current))
        .block(block);
      frame.render_widget(paragraph, *button_area);
    }
    Ok(())
  }
}

#[async_trait::async_trait]
impl AsyncComponent for NavBar {
  async fn handle_events(&mut self, event: Option<crate::tui::Event>) -> color_eyre::Result<Option<Action>> {
    match event {
      Some(crate::tui::Event::Key(key)) if key.modifiers == KeyModifiers::NONE => match key.code {
        KeyCode::Char(c) => Ok(self.button_for_key(c).map(|button| Action::Navigate(button.destination))),
        _ => Ok(None),
      },
      _ => Ok(None),
    }
  }

  async fn update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
    match action {
      Action::Navigate(destination) => Ok(self.navigate(destination).then_some(Action::Render)),
      Action::NavigateBack => match self.navigator.back() {
        Some(page) => {
          debug!("Navigated back to {}", page);
          Ok(Some(Action::Render))
        },
        None => Ok(None),
      },
      _ => Ok(None),
    }
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyEvent;
  use pretty_assertions::assert_eq;
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;
  use crate::navigation::History;

  fn nav_bar() -> NavBar {
    NavBar::new(
      Box::new(History::default()),
      vec![NavButton::new(Page::Renters, "Renters", true), NavButton::new(Page::Filters, "Filters", false)],
    )
  }

  fn key(c: char) -> Option<crate::tui::Event> {
    Some(crate::tui::Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
  }

  #[test]
  fn test_activate_pushes_destination() {
    let mut history = History::default();
    let button = NavButton::new(Page::Filters, "Filters", false);

    button.activate(&mut history);

    assert_eq!(history.current(), Page::Filters);
    assert_eq!(history.depth(), 2);
  }

  #[tokio::test]
  async fn test_digit_keys_map_to_buttons() {
    let mut bar = nav_bar();

    assert_eq!(bar.handle_events(key('2')).await.unwrap(), Some(Action::Navigate(Page::Filters)));
    assert_eq!(bar.handle_events(key('1')).await.unwrap(), Some(Action::Navigate(Page::Renters)));
    assert_eq!(bar.handle_events(key('3')).await.unwrap(), None);
    assert_eq!(bar.handle_events(key('0')).await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_navigate_and_back() {
    let mut bar = nav_bar();

    assert_eq!(bar.update(Action::Navigate(Page::Filters)).await.unwrap(), Some(Action::Render));
    assert_eq!(bar.current(), Page::Filters);
    assert_eq!(bar.update(Action::Navigate(Page::Filters)).await.unwrap(), None);

    assert_eq!(bar.update(Action::NavigateBack).await.unwrap(), Some(Action::Render));
    assert_eq!(bar.current(), Page::Renters);
    assert_eq!(bar.update(Action::NavigateBack).await.unwrap(), None);
  }

  #[test]
  fn test_draw_labels_buttons() {
    let mut bar = nav_bar();
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

    terminal.draw(|f| bar.draw(f, f.area()).unwrap()).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("1 Renters"));
    assert!(text.contains("2 Filters"));
  }
}
