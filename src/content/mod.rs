//! Content module - posts, the read-only content store and its providers

mod error;
mod post;
mod provider;
mod store;

pub use error::ContentError;
pub use post::Post;
pub use provider::{
    BuiltinContent, ContentDocument, ContentFormat, ContentProvider, FileContent, BUILTIN_POSTS,
};
pub use store::ContentStore;
