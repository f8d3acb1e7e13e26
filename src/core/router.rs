use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router};

use crate::core::middleware;
use crate::features::about::{routes as about_routes, AboutService};
use crate::features::apps::{routes as apps_routes, AppService};
use crate::features::blog_posts::{routes as blog_routes, BlogPostService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::developer_info::{routes as developer_routes, DeveloperInfoService};

/// Realm announced in the admin Basic auth challenge
const ADMIN_REALM: &str = "AppLand Admin";

/// Every service the HTTP layer dispatches to
#[derive(Clone)]
pub struct Services {
    pub categories: Arc<CategoryService>,
    pub apps: Arc<AppService>,
    pub blog_posts: Arc<BlogPostService>,
    pub about: Arc<AboutService>,
    pub developer_info: Arc<DeveloperInfoService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Public routes, the Basic-auth protected `/api/admin` area and `/health`.
///
/// `admin_credentials` is the expected `username:password` pair.
pub fn api_router(
    services: &Services,
    admin_credentials: Arc<String>,
    max_body_size: usize,
) -> Router {
    let public_routes = Router::new()
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(apps_routes::routes(Arc::clone(&services.apps)))
        .merge(blog_routes::routes(Arc::clone(&services.blog_posts)))
        .merge(about_routes::routes(Arc::clone(&services.about)))
        .merge(developer_routes::routes(Arc::clone(&services.developer_info)));

    let admin_routes = Router::new()
        .merge(categories_routes::admin_routes(Arc::clone(
            &services.categories,
        )))
        .merge(apps_routes::admin_routes(Arc::clone(&services.apps)))
        .merge(blog_routes::admin_routes(Arc::clone(&services.blog_posts)))
        .merge(about_routes::admin_routes(Arc::clone(&services.about)))
        .merge(developer_routes::admin_routes(Arc::clone(
            &services.developer_info,
        )))
        .route_layer(from_fn(middleware::basic_auth_middleware(
            admin_credentials,
            ADMIN_REALM,
        )));

    Router::new()
        .route("/health", get(health_check))
        .merge(public_routes)
        .nest("/api/admin", admin_routes)
        .layer(DefaultBodyLimit::max(max_body_size))
}
