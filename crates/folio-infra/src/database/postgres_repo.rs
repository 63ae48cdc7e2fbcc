//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use folio_core::domain::{Post, PostChanges};
use folio_core::error::RepoError;
use folio_core::ports::{PostRepository, UpdateResult};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }

    async fn newest_with_slug(&self, slug: &str) -> Result<Option<post::Model>, RepoError> {
        PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .order_by_desc(post::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }
}

/// Keep connectivity failures apart from everything else.
fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(slug = %slug, "Finding post by slug");

        Ok(self.newest_with_slug(slug).await?.map(Into::into))
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        changes: PostChanges,
    ) -> Result<UpdateResult, RepoError> {
        let Some(model) = self.newest_with_slug(slug).await? else {
            return Ok(UpdateResult::NOT_MATCHED);
        };

        let current = Post::from(model.clone());
        if !changes.modifies(&current) {
            return Ok(UpdateResult {
                matched: true,
                modified: false,
            });
        }

        // Only the content columns and updated_at are written; created_at is never set here.
        let mut active_model = model.into_active_model();
        active_model.title = Set(changes.title);
        active_model.slug = Set(changes.slug);
        active_model.body = Set(changes.body);
        active_model.image = Set(changes.image);
        active_model.category = Set(changes.category);
        active_model.updated_at = Set(changes.updated_at.into());

        active_model.update(&self.db).await.map_err(map_db_err)?;

        Ok(UpdateResult {
            matched: true,
            modified: true,
        })
    }
}
