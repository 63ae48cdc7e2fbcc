//! Post handlers.

use actix_web::{HttpResponse, web};

use folio_core::service::{PostSubmission, UpdateOutcome};
use folio_shared::dto::{PostWriteRequest, PostWriteResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// The raw body is read leniently so the password check always runs first.
fn submission(body: &web::Bytes) -> PostSubmission {
    let req = PostWriteRequest::from_slice(body);
    PostSubmission {
        pw: req.pw,
        title: req.title,
        body: req.body,
        image: req.image,
        category: req.category,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(submission(&body)).await?;
    Ok(HttpResponse::Created().json(PostWriteResponse::created(post.slug)))
}

/// PUT /posts/{slug}
pub async fn update_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let outcome = state.posts.update(&slug, submission(&body)).await?;

    let response = match outcome {
        UpdateOutcome::Updated { slug } => PostWriteResponse::updated(slug),
        UpdateOutcome::Unchanged { slug } => PostWriteResponse::unchanged(slug),
    };

    Ok(HttpResponse::Ok().json(response))
}
