use serde::{Deserialize, Serialize};

use super::types::RenterRecord;

/// Inclusive bounds; a missing bound is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
  pub min: Option<u32>,
  pub max: Option<u32>,
}

impl NumericRange {
  pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
    NumericRange { min, max }
  }

  pub fn is_unbounded(&self) -> bool {
    self.min.is_none() && self.max.is_none()
  }

  pub fn contains(&self, value: u32) -> bool {
    self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
  }

  /// Whether `[low, high]` shares at least one value with this range. Missing ends are open.
  pub fn overlaps(&self, low: Option<u32>, high: Option<u32>) -> bool {
    let low = low.unwrap_or(u32::MIN);
    let high = high.unwrap_or(u32::MAX);
    low <= self.max.unwrap_or(u32::MAX) && self.min.unwrap_or(u32::MIN) <= high
  }

  pub fn describe(&self, unit: &str) -> String {
    match (self.min, self.max) {
      (Some(min), Some(max)) => format!("{unit}{min} to {unit}{max}"),
      (Some(min), None) => format!("at least {unit}{min}"),
      (None, Some(max)) => format!("at most {unit}{max}"),
      (None, None) => "any".to_string(),
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenterFilter {
  pub budget: NumericRange,
  pub age: NumericRange,
}

impl RenterFilter {
  /// Renters without the filtered field only match when that range is unbounded.
  pub fn matches(&self, renter: &RenterRecord) -> bool {
    let budget_matches = self.budget.is_unbounded()
      || ((renter.budget_min.is_some() || renter.budget_max.is_some())
        && self.budget.overlaps(renter.budget_min, renter.budget_max));
    let age_matches = self.age.is_unbounded() || renter.age.is_some_and(|age| self.age.contains(age));
    budget_matches && age_matches
  }

  pub fn apply(&self, renters: &[RenterRecord]) -> Vec<RenterRecord> {
    renters.iter().filter(|renter| self.matches(renter)).cloned().collect()
  }
}
