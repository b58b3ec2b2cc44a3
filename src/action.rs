use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
  navigation::Page,
  renters::{RenterFilter, RenterId, RenterRecord},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
  Tick,
  Render,
  Resize(u16, u16),
  Suspend,
  Resume,
  Quit,
  // Alerts
  Error(String),
  Notify(String),
  DismissAlert,
  // Loading
  Refresh,
  RentersLoaded(Vec<RenterRecord>),
  SetLoading(bool),
  // Renter list
  SelectNext,
  SelectPrevious,
  Expand(RenterId),
  Collapse(RenterId),
  AddFriend(RenterId),
  RemoveFriend(RenterId),
  FriendsChanged(RenterId, bool),
  // Navigation
  Navigate(Page),
  NavigateBack,
  // Filters
  StartInputMode,
  EndInputMode,
  FilterChanged(RenterFilter),
}
