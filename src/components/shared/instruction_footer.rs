use ratatui::{
  layout::Rect,
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::tui::Frame;

const SEPARATOR: &str = " | ";

#[derive(Debug, Default)]
pub struct InstructionFooter {}

impl InstructionFooter {
  /// Renders the key hints for whatever is focused. Nothing is drawn when there are no hints.
  pub fn render(&self, frame: &mut Frame<'_>, area: Rect, instructions: Vec<&'static str>) {
    if instructions.is_empty() {
      return;
    }

    let paragraph = Paragraph::new(Self::line(&instructions)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
  }

  fn line(instructions: &[&'static str]) -> Line<'static> {
    let mut spans = Vec::with_capacity(instructions.len() * 2);
    for (index, instruction) in instructions.iter().enumerate() {
      if index > 0 {
        spans.push(Span::styled(SEPARATOR, theme::dim()));
      }
      spans.push(Span::raw(*instruction));
    }
    Line::from(spans)
  }
}

#[cfg(test)]
mod tests {
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;

  #[test]
  fn test_renders_joined_instructions() {
    let footer = InstructionFooter::default();
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

    terminal.draw(|f| footer.render(f, f.area(), vec!["Enter: Expand", "Q: Quit"])).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Enter: Expand | Q: Quit"));
  }

  #[test]
  fn test_renders_nothing_without_instructions() {
    let footer = InstructionFooter::default();
    let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();

    terminal.draw(|f| footer.render(f, f.area(), Vec::new())).unwrap();

    assert!(terminal.backend().buffer().content().iter().all(|cell| cell.symbol() == " "));
  }
}
