use std::sync::Arc;

use axum::{routing::get, routing::put, Router};

use crate::features::about::handlers;
use crate::features::about::services::AboutService;

pub fn routes(service: Arc<AboutService>) -> Router {
    Router::new()
        .route("/api/about", get(handlers::get_about))
        .with_state(service)
}

/// Admin about route, nested under `/api/admin`
pub fn admin_routes(service: Arc<AboutService>) -> Router {
    Router::new()
        .route("/about", put(handlers::update_about))
        .with_state(service)
}
