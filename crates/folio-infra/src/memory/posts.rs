//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::domain::{Post, PostChanges};
use folio_core::error::RepoError;
use folio_core::ports::{PostRepository, UpdateResult};

/// In-memory post store behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Index of the newest post carrying `slug`.
    fn position_of(posts: &[Post], slug: &str) -> Option<usize> {
        posts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.slug == slug)
            .max_by_key(|(_, p)| p.created_at)
            .map(|(i, _)| i)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(Self::position_of(&posts, slug).map(|i| posts[i].clone()))
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        changes: PostChanges,
    ) -> Result<UpdateResult, RepoError> {
        // Hold the write lock across lookup and write
        let mut posts = self.posts.write().await;

        let Some(index) = Self::position_of(&posts, slug) else {
            return Ok(UpdateResult::NOT_MATCHED);
        };

        let post = &mut posts[index];
        if !changes.modifies(post) {
            return Ok(UpdateResult {
                matched: true,
                modified: false,
            });
        }

        post.apply(changes);
        Ok(UpdateResult {
            matched: true,
            modified: true,
        })
    }
}
