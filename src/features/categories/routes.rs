use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public, read-only category routes
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{identifier}", get(handlers::get_category))
        .with_state(service)
}

/// Admin category routes, nested under `/api/admin`
///
/// Note: the caller wraps these in the admin basic auth layer
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", post(handlers::create_category))
        .route(
            "/categories/{identifier}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service)
}
