use ratatui::widgets::ListItem;

use crate::{action::Action, renters::RenterRecord};

/// Defines the contract for one way of presenting a renter inside the renter list.
pub trait ItemPresentation {
  /// The record being presented.
  fn renter(&self) -> &RenterRecord;

  /// Renders the renter as a `ratatui::widgets::ListItem`.
  fn render(&self) -> ListItem<'static>;

  /// The action that moves this renter to the other presentation.
  fn transition(&self) -> Action;

  /// The friend mutation offered by this presentation, if any.
  fn friend_action(&self) -> Option<Action>;

  /// Provides the keybinding instructions for the footer.
  fn instructions(&self) -> Vec<&'static str>;
}
