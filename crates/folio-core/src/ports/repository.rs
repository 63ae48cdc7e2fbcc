use async_trait::async_trait;

use crate::domain::{Post, PostChanges};
use crate::error::RepoError;

/// Outcome of an update matched by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// A post with the requested slug existed.
    pub matched: bool,
    /// The stored post was actually rewritten.
    pub modified: bool,
}

impl UpdateResult {
    pub const NOT_MATCHED: Self = Self {
        matched: false,
        modified: false,
    };
}

/// Post repository - the persistence collaborator for the post store.
///
/// Implementations report datastore failures as `Err`, and "nothing matched"
/// as `Ok(None)` or `matched == false`, never as an error.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. No slug uniqueness is enforced.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// All posts, most recently created first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// The post with the given slug. When several share it, the newest wins.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Write `changes` onto the post matched by `slug`, the same one
    /// `find_by_slug` would return. Never inserts. When the changes would not
    /// alter the stored content nothing is written.
    async fn update_by_slug(
        &self,
        slug: &str,
        changes: PostChanges,
    ) -> Result<UpdateResult, RepoError>;
}
