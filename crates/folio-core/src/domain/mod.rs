//! Domain entities - the core business objects.

mod post;
mod slug;

pub use post::{Post, PostChanges, PostDraft};
pub use slug::derive_slug;
