pub mod filters;
pub mod renter_list;

pub use filters::FiltersView;
pub use renter_list::RenterListView;
