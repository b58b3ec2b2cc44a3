pub mod alert;
pub mod expansion_set;
pub mod instruction_footer;
pub mod nav_button;
pub mod numeric_input;
pub mod range_input;
pub mod theme;

pub use alert::{AlertBanner, Severity};
pub use expansion_set::ExpansionSet;
pub use instruction_footer::InstructionFooter;
pub use nav_button::{NavBar, NavButton};
pub use numeric_input::NumericInput;
pub use range_input::RangeInput;
