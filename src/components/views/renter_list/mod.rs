mod compact_item;
mod expanded_item;
mod item_view;
mod list;

pub use compact_item::CompactItemView;
pub use expanded_item::ExpandedItemView;
pub use item_view::ItemView;
pub use list::{EMPTY_STATE_TEXT, ListBody, RenterListView};
