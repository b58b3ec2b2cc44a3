use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("renter record at index {index} has no renter_id")]
  MissingRenterId { index: usize },
  #[error("unsupported renter file format: {0}")]
  UnknownFormat(String),
  #[error("{0}")]
  Friendship(String),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error(transparent)]
  Json5(#[from] json5::Error),
}
