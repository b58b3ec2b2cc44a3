pub mod file_directory;
pub mod filter;
pub mod friend_service;
#[cfg(test)]
pub mod mock_directory;
pub mod types;

pub use file_directory::FileRenterDirectory;
pub use filter::{NumericRange, RenterFilter};
pub use friend_service::MemoryFriendService;
pub use types::{FriendService, RenterDirectory, RenterId, RenterRecord, Session, ViewerId};
