//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{Scope, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(post_routes("/posts"))
        // Path used by the existing static site
        .service(post_routes("/api/blogs"));
}

fn post_routes(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(posts::list_posts))
        .route("", web::post().to(posts::create_post))
        .route("/{slug}", web::get().to(posts::get_post))
        .route("/{slug}", web::put().to(posts::update_post))
}
