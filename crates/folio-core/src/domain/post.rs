use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

use super::slug::derive_slug;

/// Post entity - a published blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from validated input. Both timestamps are `now`.
    pub fn new(draft: PostDraft, now: DateTime<Utc>) -> Self {
        let PostDraft {
            title,
            slug,
            body,
            image,
            category,
        } = draft;

        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            body,
            image,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a set of changes in place. `created_at` is never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.slug = changes.slug;
        self.body = changes.body;
        self.image = changes.image;
        self.category = changes.category;
        self.updated_at = changes.updated_at;
    }
}

/// Validated, normalized post content as submitted by a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl PostDraft {
    /// Normalize raw request fields into a draft.
    ///
    /// `title` and `body` are trimmed and must be non-empty. `image` is kept
    /// as-is unless empty. `category` is trimmed and lower-cased, and dropped
    /// when nothing is left.
    pub fn parse(
        title: Option<&str>,
        body: Option<&str>,
        image: Option<&str>,
        category: Option<&str>,
    ) -> Result<Self, DomainError> {
        let title = title.map(str::trim).filter(|t| !t.is_empty());
        let body = body.map(str::trim).filter(|b| !b.is_empty());
        let slug = derive_slug(title);

        let (title, slug, body) = match (title.zip(slug), body) {
            (Some((title, slug)), Some(body)) => (title, slug, body),
            (None, Some(_)) => {
                return Err(DomainError::Validation("title is required".to_string()));
            }
            (Some(_), None) => {
                return Err(DomainError::Validation("body is required".to_string()));
            }
            (None, None) => {
                return Err(DomainError::Validation(
                    "title and body are required".to_string(),
                ));
            }
        };

        Ok(Self {
            title: title.to_string(),
            slug,
            body: body.to_string(),
            image: image.filter(|i| !i.is_empty()).map(String::from),
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_lowercase),
        })
    }

    /// Turn the draft into a field set for an update stamped at `now`.
    pub fn into_changes(self, now: DateTime<Utc>) -> PostChanges {
        PostChanges {
            title: self.title,
            slug: self.slug,
            body: self.body,
            image: self.image,
            category: self.category,
            updated_at: now,
        }
    }
}

/// Field set written by an update, matched against an existing post by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PostChanges {
    /// Whether writing these changes would alter the stored content.
    ///
    /// `updated_at` is ignored: a resubmission of identical content is not a
    /// modification.
    pub fn modifies(&self, post: &Post) -> bool {
        self.title != post.title
            || self.slug != post.slug
            || self.body != post.body
            || self.image != post.image
            || self.category != post.category
    }
}
