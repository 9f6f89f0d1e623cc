//! Helper functions shared by the generator, the templates and the CLI

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
