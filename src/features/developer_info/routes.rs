use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::developer_info::handlers;
use crate::features::developer_info::services::DeveloperInfoService;

pub fn routes(service: Arc<DeveloperInfoService>) -> Router {
    Router::new()
        .route(
            "/api/public/developer-info",
            get(handlers::get_public_developer_info),
        )
        .with_state(service)
}

/// Admin developer profile routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<DeveloperInfoService>) -> Router {
    Router::new()
        .route(
            "/developer-info",
            get(handlers::get_developer_info).put(handlers::update_developer_info),
        )
        .with_state(service)
}
