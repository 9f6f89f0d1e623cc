//! Page-level UI state: the search query and the single-select accordion

mod accordion;
mod state;

pub use accordion::Accordion;
pub use state::{PageSnapshot, PageState, PostView};
