use ratatui::widgets::ListItem;

use super::{CompactItemView, ExpandedItemView};
use crate::{
  action::Action,
  components::{shared::ExpansionSet, traits::item_presentation::ItemPresentation},
  renters::{RenterRecord, ViewerId},
};

/// The presentation chosen for one renter, keyed by expansion-set membership.
#[derive(Debug, Clone, Copy)]
pub enum ItemView<'a> {
  Expanded(ExpandedItemView<'a>),
  Compact(CompactItemView<'a>),
}

impl<'a> ItemView<'a> {
  pub fn select(viewer: &'a ViewerId, renter: &'a RenterRecord, expanded: &ExpansionSet) -> Self {
    if expanded.contains(&renter.renter_id) {
      ItemView::Expanded(ExpandedItemView::new(viewer, renter))
    } else {
      ItemView::Compact(CompactItemView::new(viewer, renter))
    }
  }

  pub fn is_expanded(&self) -> bool {
    matches!(self, ItemView::Expanded(_))
  }

  fn presentation(&self) -> &dyn ItemPresentation {
    match self {
      ItemView::Expanded(view) => view,
      ItemView::Compact(view) => view,
    }
  }

  pub fn renter(&self) -> &RenterRecord {
    self.presentation().renter()
  }

  pub fn render(&self) -> ListItem<'static> {
    self.presentation().render()
  }

  pub fn transition(&self) -> Action {
    self.presentation().transition()
  }

  pub fn friend_action(&self) -> Option<Action> {
    self.presentation().friend_action()
  }

  pub fn instructions(&self) -> Vec<&'static str> {
    self.presentation().instructions()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::renters::RenterId;

  #[test]
  fn test_select_follows_membership() {
    let viewer = ViewerId::new("u-1");
    let renter = RenterRecord::new("A", "Alice");
    let mut expanded = ExpansionSet::new();

    assert!(!ItemView::select(&viewer, &renter, &expanded).is_expanded());

    expanded.expand(&RenterId::from("A"));
    let view = ItemView::select(&viewer, &renter, &expanded);
    assert!(view.is_expanded());
    assert_eq!(view.transition(), Action::Collapse(RenterId::from("A")));
  }

  #[test]
  fn test_stale_ids_do_not_expand_others() {
    let viewer = ViewerId::new("u-1");
    let renter = RenterRecord::new("A", "Alice");
    let mut expanded = ExpansionSet::new();
    expanded.expand(&RenterId::from("Z"));

    let view = ItemView::select(&viewer, &renter, &expanded);

    assert!(!view.is_expanded());
    assert_eq!(view.renter().renter_id, RenterId::from("A"));
  }
}
