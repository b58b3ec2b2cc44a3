mod view;

pub use view::FiltersView;
