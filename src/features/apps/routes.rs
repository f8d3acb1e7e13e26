use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::features::apps::handlers;
use crate::features::apps::services::AppService;

/// Public, read-only app routes
pub fn routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/api/apps", get(handlers::list_apps))
        .route("/api/apps/{identifier}", get(handlers::get_app))
        .with_state(service)
}

/// Admin app routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/apps", post(handlers::create_app))
        .route(
            "/apps/{identifier}",
            get(handlers::get_app_for_edit)
                .put(handlers::update_app)
                .delete(handlers::delete_app),
        )
        .with_state(service)
}
