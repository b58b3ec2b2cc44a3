use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Page {
  #[default]
  Renters,
  Filters,
}

/// Page history service used by navigation buttons.
pub trait Navigator {
  fn push(&mut self, destination: Page);
  fn back(&mut self) -> Option<Page>;
  fn current(&self) -> Page;
}

/// A stack of visited pages. The root page is never popped.
#[derive(Debug, Clone)]
pub struct History {
  stack: Vec<Page>,
}

impl History {
  pub fn new(root: Page) -> Self {
    History { stack: vec![root] }
  }

  pub fn depth(&self) -> usize {
    self.stack.len()
  }
}

impl Default for History {
  fn default() -> Self {
    History::new(Page::default())
  }
}

impl Navigator for History {
  /// Pushing the page already on top is a no-op.
  fn push(&mut self, destination: Page) {
    if self.current() != destination {
      self.stack.push(destination);
    }
  }

  fn back(&mut self) -> Option<Page> {
    if self.stack.len() <= 1 {
      return None;
    }
    self.stack.pop();
    Some(self.current())
  }

  fn current(&self) -> Page {
    self.stack.last().copied().unwrap_or_default()
  }
}
