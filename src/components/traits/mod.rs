pub mod item_presentation;
