use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::types::{RenterDirectory, RenterRecord, validate_renters};
use crate::error::Error;

/// Reads renter records from a `.json` or `.json5` file on every load.
#[derive(Debug, Clone)]
pub struct FileRenterDirectory {
  path: PathBuf,
}

impl FileRenterDirectory {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    FileRenterDirectory { path: path.into() }
  }
}

pub fn decode_renters(extension: &str, content: &str) -> Result<Vec<RenterRecord>, Error> {
  let renters: Vec<RenterRecord> = match extension {
    "json5" => json5::from_str(content)?,
    "json" => serde_json::from_str(content)?,
    other => return Err(Error::UnknownFormat(other.to_string())),
  };
  validate_renters(renters)
}

#[async_trait]
impl RenterDirectory for FileRenterDirectory {
  async fn renters(&self) -> Result<Vec<RenterRecord>, Error> {
    let extension = self.path.extension().and_then(|ext| ext.to_str()).unwrap_or_default().to_ascii_lowercase();
    let content = tokio::fs::read_to_string(&self.path).await?;
    let renters = decode_renters(&extension, &content)?;
    info!("Loaded {} renters from {}", renters.len(), self.path.display());
    Ok(renters)
  }
}
