use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::features::blog_posts::handlers;
use crate::features::blog_posts::services::BlogPostService;

/// Public, read-only blog routes
pub fn routes(service: Arc<BlogPostService>) -> Router {
    Router::new()
        .route("/api/blog-posts", get(handlers::list_blog_posts))
        .route("/api/blog-posts/{identifier}", get(handlers::get_blog_post))
        .with_state(service)
}

/// Admin blog routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<BlogPostService>) -> Router {
    Router::new()
        .route("/blog-posts", post(handlers::create_blog_post))
        .route(
            "/blog-posts/{identifier}",
            get(handlers::get_blog_post)
                .put(handlers::update_blog_post)
                .delete(handlers::delete_blog_post),
        )
        .with_state(service)
}
