use std::collections::HashSet;

use crate::renters::RenterId;

/// The renters currently shown in their expanded presentation.
///
/// Membership is the only state. Ids that are not in the current record list are kept and simply never
/// render until a record with that id comes back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpansionSet {
  ids: HashSet<RenterId>,
}

impl ExpansionSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns whether the set changed.
  pub fn expand(&mut self, id: &RenterId) -> bool {
    self.ids.insert(id.clone())
  }

  /// Returns whether the set changed.
  pub fn collapse(&mut self, id: &RenterId) -> bool {
    self.ids.remove(id)
  }

  pub fn contains(&self, id: &RenterId) -> bool {
    self.ids.contains(id)
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_starts_empty() {
    let set = ExpansionSet::new();

    assert!(set.is_empty());
    assert!(!set.contains(&RenterId::from("A")));
  }

  #[test]
  fn test_expand_is_idempotent() {
    let mut set = ExpansionSet::new();
    let id = RenterId::from("A");

    assert!(set.expand(&id));
    let after_once = set.clone();
    assert!(!set.expand(&id));

    assert_eq!(set, after_once);
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_collapse_is_idempotent() {
    let mut set = ExpansionSet::new();
    let id = RenterId::from("A");
    set.expand(&id);

    assert!(set.collapse(&id));
    let after_once = set.clone();
    assert!(!set.collapse(&id));

    assert_eq!(set, after_once);
  }

  #[test]
  fn test_expand_then_collapse_restores_state() {
    let mut set = ExpansionSet::new();
    set.expand(&RenterId::from("B"));
    let before = set.clone();

    set.expand(&RenterId::from("A"));
    set.collapse(&RenterId::from("A"));

    assert_eq!(set, before);
  }

  #[test]
  fn test_collapse_absent_is_noop() {
    let mut set = ExpansionSet::new();
    set.expand(&RenterId::from("A"));
    let before = set.clone();

    assert!(!set.collapse(&RenterId::from("Z")));

    assert_eq!(set, before);
  }

  #[test]
  fn test_cycles_between_states() {
    let mut set = ExpansionSet::new();
    let id = RenterId::from("A");

    for _ in 0..3 {
      set.expand(&id);
      assert!(set.contains(&id));
      set.collapse(&id);
      assert!(!set.contains(&id));
    }
  }
}
