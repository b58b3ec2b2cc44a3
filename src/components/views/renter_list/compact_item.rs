use ratatui::{
  text::{Line, Span},
  widgets::ListItem,
};

use crate::{
  action::Action,
  components::{shared::theme, traits::item_presentation::ItemPresentation},
  renters::{RenterRecord, ViewerId},
};

/// One-line summary of a renter, offering "expand" and "add friend".
#[derive(Debug, Clone, Copy)]
pub struct CompactItemView<'a> {
  viewer: &'a ViewerId,
  renter: &'a RenterRecord,
}

impl<'a> CompactItemView<'a> {
  pub fn new(viewer: &'a ViewerId, renter: &'a RenterRecord) -> Self {
    CompactItemView { viewer, renter }
  }
}

impl ItemPresentation for CompactItemView<'_> {
  fn renter(&self) -> &RenterRecord {
    self.renter
  }

  fn render(&self) -> ListItem<'static> {
    let mut parts = vec![Span::styled("[+] ", theme::dim()), Span::raw(self.renter.display_name().to_string())];

    if let Some(age) = self.renter.age {
      parts.push(Span::raw(format!(", {age}")));
    }
    if let Some(budget) = self.renter.budget_label() {
      parts.push(Span::styled(format!(" [{budget}]"), theme::dim()));
    }
    if self.renter.is_friend {
      parts.push(Span::styled(" (friend)", theme::friend_tag()));
    }
    if self.viewer.is_renter(&self.renter.renter_id) {
      parts.push(Span::styled(" (you)", theme::dim()));
    }

    ListItem::from(Line::from(parts))
  }

  fn transition(&self) -> Action {
    Action::Expand(self.renter.renter_id.clone())
  }

  fn friend_action(&self) -> Option<Action> {
    if self.renter.is_friend || self.viewer.is_renter(&self.renter.renter_id) {
      return None;
    }
    Some(Action::AddFriend(self.renter.renter_id.clone()))
  }

  fn instructions(&self) -> Vec<&'static str> {
    let mut instructions = vec!["Enter: Expand"];
    if self.friend_action().is_some() {
      instructions.push("F: Add Friend");
    }
    instructions
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::renters::RenterId;

  #[test]
  fn test_render_name_only() {
    let viewer = ViewerId::new("u-1");
    let renter = RenterRecord::new("r-1", "Alice");

    let rendered = CompactItemView::new(&viewer, &renter).render();

    assert_eq!(
      rendered,
      ListItem::new(Line::from_iter([Span::styled("[+] ", theme::dim()), Span::raw("Alice")]))
    );
  }

  #[test]
  fn test_render_summary_fields() {
    let viewer = ViewerId::new("u-1");
    let renter = RenterRecord {
      age: Some(27),
      budget_min: Some(900),
      budget_max: Some(1200),
      is_friend: true,
      bio: Some("Not shown when compact".to_string()),
      ..RenterRecord::new("r-1", "Alice")
    };

    let rendered = CompactItemView::new(&viewer, &renter).render();

    assert_eq!(
      rendered,
      ListItem::new(Line::from_iter([
        Span::styled("[+] ", theme::dim()),
        Span::raw("Alice"),
        Span::raw(", 27"),
        Span::styled(" [$900 - $1200]", theme::dim()),
        Span::styled(" (friend)", theme::friend_tag()),
      ]))
    );
  }

  #[test]
  fn test_transition_expands() {
    let viewer = ViewerId::new("u-1");
    let renter = RenterRecord::new("r-1", "Alice");

    assert_eq!(CompactItemView::new(&viewer, &renter).transition(), Action::Expand(RenterId::from("r-1")));
  }

  #[test]
  fn test_friend_action() {
    let viewer = ViewerId::new("u-1");
    let stranger = RenterRecord::new("r-1", "Alice");
    let friend = RenterRecord { is_friend: true, ..RenterRecord::new("r-2", "Ben") };
    let me = RenterRecord::new("u-1", "Me");

    assert_eq!(CompactItemView::new(&viewer, &stranger).friend_action(), Some(Action::AddFriend("r-1".into())));
    assert_eq!(CompactItemView::new(&viewer, &friend).friend_action(), None);
    assert_eq!(CompactItemView::new(&viewer, &me).friend_action(), None);
    assert_eq!(CompactItemView::new(&viewer, &me).instructions(), vec!["Enter: Expand"]);
  }
}
