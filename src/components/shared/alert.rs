use crossterm::event::KeyCode;
use ratatui::{
  layout::{Alignment, Rect},
  style::{Color, Style},
  text::Line,
  widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
  action::Action,
  components::{AsyncComponent, Component},
  tui::Frame,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  #[default]
  Error,
  Success,
}

impl Severity {
  fn color(self) -> Color {
    match self {
      Severity::Error => Color::Red,
      Severity::Success => Color::Green,
    }
  }
}

/// A dismissible banner. Errors carry an "Error" title, success notices carry none.
#[derive(Debug, Default)]
pub struct AlertBanner {
  visible: bool,
  message: String,
  severity: Severity,
}

impl AlertBanner {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
    self.severity = severity;
    self.message = message.into();
    self.visible = true;
  }

  pub fn dismiss(&mut self) {
    self.visible = false;
  }

  pub fn is_visible(&self) -> bool {
    self.visible
  }

  pub fn severity(&self) -> Severity {
    self.severity
  }

  /// Rows the banner needs in the layout; zero while hidden.
  pub fn height(&self) -> u16 {
    if self.visible { 3 } else { 0 }
  }
}

impl Component for AlertBanner {
  fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) -> color_eyre::Result<()> {
    Ok(())
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> color_eyre::Result<()> {
    if !self.visible || area.height == 0 {
      return Ok(());
    }

    let color = self.severity.color();
    let mut block = Block::default()
      .borders(Borders::ALL)
      .border_type(BorderType::Rounded)
      .border_style(Style::default().fg(color))
      .title_top(Line::from("CLOSE").right_aligned());
    if self.severity == Severity::Error {
      block = block.title_top(Line::from("Error").left_aligned());
    }

    let paragraph = Paragraph::new(self.message.as_str())
      .block(block)
      .style(Style::default().fg(color))
      .alignment(Alignment::Left)
      .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
    Ok(())
  }
}

#[async_trait::async_trait]
impl AsyncComponent for AlertBanner {
  async fn handle_events(&mut self, event: Option<crate::tui::Event>) -> color_eyre::Result<Option<Action>> {
    if !self.visible {
      return Ok(None);
    }
    match event {
      Some(crate::tui::Event::Key(key)) => match key.code {
        KeyCode::Esc | KeyCode::Char('x' | 'X') => Ok(Some(Action::DismissAlert)),
        _ => Ok(None),
      },
      _ => Ok(None),
    }
  }

  async fn update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
    match action {
      Action::Error(message) => {
        self.show(Severity::Error, message);
        Ok(Some(Action::Render))
      },
      Action::Notify(message) => {
        self.show(Severity::Success, message);
        Ok(Some(Action::Render))
      },
      Action::DismissAlert => {
        self.dismiss();
        Ok(Some(Action::Render))
      },
      _ => Ok(None),
    }
  }
}
