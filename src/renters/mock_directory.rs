use async_trait::async_trait;

use super::{RenterDirectory, RenterRecord};
use crate::error::Error;

#[derive(Clone, Debug, Default)]
pub struct MockRenterDirectory {
  pub renters: Vec<RenterRecord>,
  pub fail: bool,
}

impl MockRenterDirectory {
  pub fn with_renters(renters: Vec<RenterRecord>) -> Self {
    MockRenterDirectory { renters, fail: false }
  }

  pub fn failing() -> Self {
    MockRenterDirectory { renters: Vec::new(), fail: true }
  }
}

#[async_trait]
impl RenterDirectory for MockRenterDirectory {
  async fn renters(&self) -> Result<Vec<RenterRecord>, Error> {
    if self.fail {
      return Err(Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "renters unavailable")));
    }
    Ok(self.renters.clone())
  }
}
