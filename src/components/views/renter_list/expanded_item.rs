use ratatui::{
  style::{Modifier, Style},
  text::{Line, Span, Text},
  widgets::ListItem,
};

use crate::{
  action::Action,
  components::{shared::theme, traits::item_presentation::ItemPresentation},
  renters::{RenterRecord, ViewerId},
};

const DETAIL_INDENT: &str = "    ";

/// Full detail of a renter, offering "collapse" and "unfriend".
#[derive(Debug, Clone, Copy)]
pub struct ExpandedItemView<'a> {
  viewer: &'a ViewerId,
  renter: &'a RenterRecord,
}

impl<'a> ExpandedItemView<'a> {
  pub fn new(viewer: &'a ViewerId, renter: &'a RenterRecord) -> Self {
    ExpandedItemView { viewer, renter }
  }

  fn header(&self) -> Line<'static> {
    let mut parts = vec![
      Span::styled("[-] ", theme::dim()),
      Span::styled(self.renter.display_name().to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if self.renter.is_friend {
      parts.push(Span::styled(" (friend)", theme::friend_tag()));
    }
    if self.viewer.is_renter(&self.renter.renter_id) {
      parts.push(Span::styled(" (you)", theme::dim()));
    }
    Line::from(parts)
  }

  fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![Span::styled(format!("{DETAIL_INDENT}{label}: "), theme::dim()), Span::raw(value)])
  }

  fn details(&self) -> Vec<Line<'static>> {
    let renter = self.renter;
    let mut lines = Vec::new();
    if let Some(age) = renter.age {
      lines.push(Self::detail("Age", age.to_string()));
    }
    if let Some(budget) = renter.budget_label() {
      lines.push(Self::detail("Budget", budget));
    }
    if let Some(occupation) = &renter.occupation {
      lines.push(Self::detail("Occupation", occupation.clone()));
    }
    if let Some(move_in) = &renter.move_in {
      lines.push(Self::detail("Move-in", move_in.clone()));
    }
    if let Some(bio) = &renter.bio {
      lines.push(Self::detail("Bio", bio.clone()));
    }
    if lines.is_empty() {
      lines.push(Line::from(Span::styled(format!("{DETAIL_INDENT}No details provided"), theme::dim())));
    }
    lines
  }
}

impl ItemPresentation for ExpandedItemView<'_> {
  fn renter(&self) -> &RenterRecord {
    self.renter
  }

  fn render(&self) -> ListItem<'static> {
    let mut lines = vec![self.header()];
    lines.extend(self.details());
    ListItem::new(Text::from(lines))
  }

  fn transition(&self) -> Action {
    Action::Collapse(self.renter.renter_id.clone())
  }

  fn friend_action(&self) -> Option<Action> {
    if !self.renter.is_friend || self.viewer.is_renter(&self.renter.renter_id) {
      return None;
    }
    Some(Action::RemoveFriend(self.renter.renter_id.clone()))
  }

  fn instructions(&self) -> Vec<&'static str> {
    let mut instructions = vec!["Enter: Collapse"];
    if self.friend_action().is_some() {
      instructions.push("F: Unfriend");
    }
    instructions
  }
}
