use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifies one renter. Blank ids are rejected when records are decoded.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenterId(String);

impl RenterId {
  pub fn new(id: impl Into<String>) -> Self {
    RenterId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_blank(&self) -> bool {
    self.0.trim().is_empty()
  }
}

impl fmt::Display for RenterId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for RenterId {
  fn from(id: &str) -> Self {
    RenterId::new(id)
  }
}

/// The person browsing the list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerId(String);

impl ViewerId {
  pub fn new(id: impl Into<String>) -> Self {
    ViewerId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// A viewer who is also listed as a renter sees their own entry.
  pub fn is_renter(&self, renter: &RenterId) -> bool {
    self.0 == renter.0
  }
}

impl fmt::Display for ViewerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  pub viewer_id: ViewerId,
}

impl Session {
  pub fn new(viewer_id: impl Into<String>) -> Self {
    Session { viewer_id: ViewerId::new(viewer_id) }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenterRecord {
  #[serde(default, alias = "renterID", alias = "renterId")]
  pub renter_id: RenterId,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub age: Option<u32>,
  #[serde(default)]
  pub budget_min: Option<u32>,
  #[serde(default)]
  pub budget_max: Option<u32>,
  #[serde(default)]
  pub occupation: Option<String>,
  #[serde(default)]
  pub move_in: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub is_friend: bool,
}

impl RenterRecord {
  pub fn new(renter_id: impl Into<String>, name: impl Into<String>) -> Self {
    RenterRecord { renter_id: RenterId::new(renter_id), name: name.into(), ..Default::default() }
  }

  /// Name to show, falling back to the id for records without one.
  pub fn display_name(&self) -> &str {
    if self.name.trim().is_empty() { self.renter_id.as_str() } else { &self.name }
  }

  pub fn budget_label(&self) -> Option<String> {
    match (self.budget_min, self.budget_max) {
      (Some(min), Some(max)) => Some(format!("${min} - ${max}")),
      (Some(min), None) => Some(format!("from ${min}")),
      (None, Some(max)) => Some(format!("up to ${max}")),
      (None, None) => None,
    }
  }
}

/// Supplies the renter records shown by the list.
#[async_trait]
pub trait RenterDirectory: Send + Sync {
  async fn renters(&self) -> Result<Vec<RenterRecord>, Error>;
}

/// Friend-relationship mutations between the viewer and a renter.
#[async_trait]
pub trait FriendService: Send + Sync {
  async fn add_friend(&self, viewer: &ViewerId, renter: &RenterId) -> Result<(), Error>;
  async fn remove_friend(&self, viewer: &ViewerId, renter: &RenterId) -> Result<(), Error>;
}

/// Rejects any record whose id is missing or blank, reporting its position.
pub fn validate_renters(renters: Vec<RenterRecord>) -> Result<Vec<RenterRecord>, Error> {
  if let Some(index) = renters.iter().position(|renter| renter.renter_id.is_blank()) {
    return Err(Error::MissingRenterId { index });
  }
  Ok(renters)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_name_falls_back_to_id() {
    let named = RenterRecord::new("r-1", "Alice");
    let unnamed = RenterRecord::new("r-2", "  ");

    assert_eq!(named.display_name(), "Alice");
    assert_eq!(unnamed.display_name(), "r-2");
  }

  #[test]
  fn test_budget_label() {
    let mut renter = RenterRecord::new("r-1", "Alice");
    assert_eq!(renter.budget_label(), None);

    renter.budget_min = Some(900);
    assert_eq!(renter.budget_label(), Some("from $900".to_string()));

    renter.budget_max = Some(1200);
    assert_eq!(renter.budget_label(), Some("$900 - $1200".to_string()));

    renter.budget_min = None;
    assert_eq!(renter.budget_label(), Some("up to $1200".to_string()));
  }

  #[test]
  fn test_validate_renters_reports_index() {
    let renters = vec![RenterRecord::new("r-1", "Alice"), RenterRecord::new(" ", "Nobody")];

    let err = validate_renters(renters).unwrap_err();

    assert!(matches!(err, Error::MissingRenterId { index: 1 }));
    assert_eq!(err.to_string(), "renter record at index 1 has no renter_id");
  }

  #[test]
  fn test_validate_renters_keeps_duplicates_and_order() {
    let renters = vec![RenterRecord::new("b", "B"), RenterRecord::new("a", "A"), RenterRecord::new("b", "B")];

    let validated = validate_renters(renters.clone()).unwrap();

    assert_eq!(validated, renters);
  }

  #[test]
  fn test_viewer_is_renter() {
    let viewer = ViewerId::new("r-1");

    assert!(viewer.is_renter(&RenterId::from("r-1")));
    assert!(!viewer.is_renter(&RenterId::from("r-2")));
  }
}
