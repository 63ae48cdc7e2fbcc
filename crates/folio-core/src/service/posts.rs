//! The post store facade: list, read, create and update posts.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Post, PostDraft};
use crate::error::DomainError;
use crate::ports::PostRepository;

use super::secret::SharedSecret;

/// Fields submitted by a writer for create and update.
#[derive(Debug, Clone, Default)]
pub struct PostSubmission {
    pub pw: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

/// Result of a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// At least one field changed. Carries the (possibly new) slug.
    Updated { slug: String },
    /// The submission matched what was stored.
    Unchanged { slug: String },
}

impl UpdateOutcome {
    pub fn slug(&self) -> &str {
        match self {
            UpdateOutcome::Updated { slug } | UpdateOutcome::Unchanged { slug } => slug,
        }
    }
}

/// Stateless facade over a [`PostRepository`].
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    secret: SharedSecret,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, secret: SharedSecret) -> Self {
        Self { repo, secret }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list_newest_first().await?)
    }

    pub async fn get(&self, slug: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Create a post. The secret is checked before anything else.
    pub async fn create(&self, submission: PostSubmission) -> Result<Post, DomainError> {
        self.secret.verify(submission.pw.as_deref())?;
        let draft = parse(&submission)?;

        let post = self.repo.insert(Post::new(draft, Utc::now())).await?;
        tracing::info!(slug = %post.slug, id = %post.id, "Post created");

        Ok(post)
    }

    /// Update the post currently stored under `slug`.
    ///
    /// The slug is re-derived from the submitted title, so a title change
    /// moves the post to a new slug for later requests.
    pub async fn update(
        &self,
        slug: &str,
        submission: PostSubmission,
    ) -> Result<UpdateOutcome, DomainError> {
        self.secret.verify(submission.pw.as_deref())?;
        let draft = parse(&submission)?;

        let new_slug = draft.slug.clone();
        let result = self
            .repo
            .update_by_slug(slug, draft.into_changes(Utc::now()))
            .await?;

        if !result.matched {
            return Err(not_found(slug));
        }

        if result.modified {
            tracing::info!(from = %slug, to = %new_slug, "Post updated");
            Ok(UpdateOutcome::Updated { slug: new_slug })
        } else {
            tracing::debug!(slug = %slug, "Post update carried no changes");
            Ok(UpdateOutcome::Unchanged { slug: new_slug })
        }
    }
}

fn parse(submission: &PostSubmission) -> Result<PostDraft, DomainError> {
    PostDraft::parse(
        submission.title.as_deref(),
        submission.body.as_deref(),
        submission.image.as_deref(),
        submission.category.as_deref(),
    )
}

fn not_found(slug: &str) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        key: slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::PostChanges;
    use crate::error::RepoError;
    use crate::ports::UpdateResult;

    #[derive(Default)]
    struct VecRepository {
        posts: Mutex<Vec<Post>>,
    }

    impl VecRepository {
        fn snapshot(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostRepository for VecRepository {
        async fn insert(&self, post: Post) -> Result<Post, RepoError> {
            self.posts.lock().unwrap().push(post.clone());
            Ok(post)
        }

        async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
            let mut posts = self.snapshot();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(posts)
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
            Ok(self
                .list_newest_first()
                .await?
                .into_iter()
                .find(|p| p.slug == slug))
        }

        async fn update_by_slug(
            &self,
            slug: &str,
            changes: PostChanges,
        ) -> Result<UpdateResult, RepoError> {
            let Some(target) = self.find_by_slug(slug).await? else {
                return Ok(UpdateResult::NOT_MATCHED);
            };
            let modified = changes.modifies(&target);
            if modified {
                let mut posts = self.posts.lock().unwrap();
                if let Some(post) = posts.iter_mut().find(|p| p.id == target.id) {
                    post.apply(changes);
                }
            }
            Ok(UpdateResult {
                matched: true,
                modified,
            })
        }
    }

    struct BrokenRepository;

    #[async_trait]
    impl PostRepository for BrokenRepository {
        async fn insert(&self, _post: Post) -> Result<Post, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Post>, RepoError> {
            Err(RepoError::Query("timeout".to_string()))
        }

        async fn update_by_slug(
            &self,
            _slug: &str,
            _changes: PostChanges,
        ) -> Result<UpdateResult, RepoError> {
            Err(RepoError::Query("timeout".to_string()))
        }
    }

    const PW: &str = "letmein";

    fn service() -> (PostService, Arc<VecRepository>) {
        let repo = Arc::new(VecRepository::default());
        let service = PostService::new(repo.clone(), SharedSecret::new(PW));
        (service, repo)
    }

    fn submission(title: &str, body: &str) -> PostSubmission {
        PostSubmission {
            pw: Some(PW.to_string()),
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_with_wrong_password_adds_nothing() {
        let (service, _repo) = service();
        let before = service.list().await.unwrap().len();

        let mut sub = submission("Hello", "World");
        sub.pw = Some("wrong".to_string());
        let err = service.create(sub).await.unwrap_err();

        assert!(matches!(err, DomainError::Forbidden));
        assert_eq!(service.list().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn test_password_checked_before_validation() {
        let (service, _repo) = service();
        let sub = PostSubmission {
            pw: None,
            ..Default::default()
        };
        assert!(matches!(
            service.create(sub).await.unwrap_err(),
            DomainError::Forbidden
        ));
    }

    #[tokio::test]
    async fn test_create_with_empty_title_adds_nothing() {
        let (service, repo) = service();
        let err = service.create(submission("  ", "Body")).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one_post() {
        let (service, repo) = service();
        let post = service
            .create(submission("Hello World!", "  First post  "))
            .await
            .unwrap();

        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.body, "First post");
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_slugs_are_allowed() {
        let (service, repo) = service();
        service.create(submission("Same", "one")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        service.create(submission("Same!", "two")).await.unwrap();

        assert_eq!(repo.snapshot().len(), 2);
        assert_eq!(service.get("same").await.unwrap().body, "two");
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (service, _repo) = service();
        for title in ["First", "Second", "Third"] {
            service.create(submission(title, "body")).await.unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let posts = service.list().await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Third", "Second", "First"]);
        assert!(posts.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[tokio::test]
    async fn test_get_unknown_slug() {
        let (service, _repo) = service();
        let err = service.get("nope").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { key, .. } if key == "nope"));
    }

    #[tokio::test]
    async fn test_update_category_only() {
        let (service, _repo) = service();
        let created = service.create(submission("Title", "Body")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let mut sub = submission("Title", "Body");
        sub.category = Some(" Travel ".to_string());
        let outcome = service.update("title", sub).await.unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                slug: "title".to_string()
            }
        );

        let updated = service.get("title").await.unwrap();
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.slug, created.slug);
        assert_eq!(updated.category.as_deref(), Some("travel"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_title_moves_slug() {
        let (service, _repo) = service();
        service.create(submission("Old Name", "Body")).await.unwrap();

        let outcome = service
            .update("old-name", submission("New Name", "Body"))
            .await
            .unwrap();

        assert_eq!(outcome.slug(), "new-name");
        assert!(service.get("old-name").await.is_err());
        assert_eq!(service.get("new-name").await.unwrap().title, "New Name");
    }

    #[tokio::test]
    async fn test_identical_resubmission_is_unchanged() {
        let (service, _repo) = service();
        let created = service.create(submission("Title", "Body")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let outcome = service
            .update("title", submission("  Title ", "Body  "))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Unchanged {
                slug: "title".to_string()
            }
        );
        assert_eq!(service.get("title").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_unknown_slug_never_inserts() {
        let (service, repo) = service();
        let err = service
            .update("ghost", submission("Ghost", "Body"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_password() {
        let (service, _repo) = service();
        service.create(submission("Title", "Body")).await.unwrap();

        let mut sub = submission("Changed", "Body");
        sub.pw = Some("nope".to_string());
        assert!(matches!(
            service.update("title", sub).await.unwrap_err(),
            DomainError::Forbidden
        ));
        assert_eq!(service.get("title").await.unwrap().title, "Title");
    }

    #[tokio::test]
    async fn test_repository_failures_surface_as_repository_errors() {
        let service = PostService::new(Arc::new(BrokenRepository), SharedSecret::new(PW));

        assert!(matches!(
            service.list().await.unwrap_err(),
            DomainError::Repository(RepoError::Connection(_))
        ));
        assert!(matches!(
            service.get("x").await.unwrap_err(),
            DomainError::Repository(_)
        ));
        assert!(matches!(
            service.create(submission("T", "B")).await.unwrap_err(),
            DomainError::Repository(_)
        ));
    }
}
