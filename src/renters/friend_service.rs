use std::{
  collections::HashSet,
  sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tracing::info;

use super::types::{FriendService, RenterId, ViewerId};
use crate::error::Error;

/// Keeps friendships for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryFriendService {
  friendships: Arc<Mutex<HashSet<(ViewerId, RenterId)>>>,
}

impl MemoryFriendService {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn are_friends(&self, viewer: &ViewerId, renter: &RenterId) -> Result<bool, Error> {
    let friendships = self.friendships.lock().map_err(|e| Error::Friendship(e.to_string()))?;
    Ok(friendships.contains(&(viewer.clone(), renter.clone())))
  }

  fn check_not_self(viewer: &ViewerId, renter: &RenterId) -> Result<(), Error> {
    if viewer.is_renter(renter) {
      return Err(Error::Friendship("You cannot befriend yourself".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl FriendService for MemoryFriendService {
  async fn add_friend(&self, viewer: &ViewerId, renter: &RenterId) -> Result<(), Error> {
    Self::check_not_self(viewer, renter)?;
    let mut friendships = self.friendships.lock().map_err(|e| Error::Friendship(e.to_string()))?;
    friendships.insert((viewer.clone(), renter.clone()));
    info!("{} added {} as a friend", viewer, renter);
    Ok(())
  }

  async fn remove_friend(&self, viewer: &ViewerId, renter: &RenterId) -> Result<(), Error> {
    Self::check_not_self(viewer, renter)?;
    let mut friendships = self.friendships.lock().map_err(|e| Error::Friendship(e.to_string()))?;
    friendships.remove(&(viewer.clone(), renter.clone()));
    info!("{} removed {} as a friend", viewer, renter);
    Ok(())
  }
}
