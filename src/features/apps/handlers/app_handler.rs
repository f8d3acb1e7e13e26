use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::apps::dtos::{AppInputDto, AppResponseDto, ListAppsQuery};
use crate::features::apps::services::AppService;
use crate::shared::codec::DecodePolicy;
use crate::shared::types::ApiResponse;

/// List apps
///
/// Newest first, each with its category embedded.
#[utoipa::path(
    get,
    path = "/api/apps",
    params(ListAppsQuery),
    responses(
        (status = 200, description = "Page of apps", body = ApiResponse<Vec<AppResponseDto>>),
    ),
    tag = "apps"
)]
pub async fn list_apps(
    State(service): State<Arc<AppService>>,
    Query(query): Query<ListAppsQuery>,
) -> Result<Json<ApiResponse<Vec<AppResponseDto>>>> {
    let (apps, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(apps), None, Some(meta))))
}

/// Get app by id or slug
///
/// Corrupt stored lists are returned as empty lists.
#[utoipa::path(
    get,
    path = "/api/apps/{identifier}",
    params(
        ("identifier" = String, Path, description = "App id or slug")
    ),
    responses(
        (status = 200, description = "App found", body = ApiResponse<AppResponseDto>),
        (status = 404, description = "App not found")
    ),
    tag = "apps"
)]
pub async fn get_app(
    State(service): State<Arc<AppService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<AppResponseDto>>> {
    let app = service.get(&identifier, DecodePolicy::Lenient).await?;
    Ok(Json(ApiResponse::success(Some(app), None, None)))
}

/// Get app for editing
///
/// Fails with 500 naming the field when a stored list is corrupt.
#[utoipa::path(
    get,
    path = "/api/admin/apps/{identifier}",
    params(
        ("identifier" = String, Path, description = "App id or slug")
    ),
    responses(
        (status = 200, description = "App found", body = ApiResponse<AppResponseDto>),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "App not found"),
        (status = 500, description = "Stored data is corrupt")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn get_app_for_edit(
    State(service): State<Arc<AppService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<AppResponseDto>>> {
    let app = service.get(&identifier, DecodePolicy::Strict).await?;
    Ok(Json(ApiResponse::success(Some(app), None, None)))
}

/// Create an app
#[utoipa::path(
    post,
    path = "/api/admin/apps",
    request_body = AppInputDto,
    responses(
        (status = 201, description = "App created", body = ApiResponse<AppResponseDto>),
        (status = 400, description = "Missing or invalid fields, or unknown category"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 409, description = "Slug already taken")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn create_app(
    State(service): State<Arc<AppService>>,
    AppJson(dto): AppJson<AppInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<AppResponseDto>>)> {
    let app = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(app), None, None)),
    ))
}

/// Replace an app
#[utoipa::path(
    put,
    path = "/api/admin/apps/{identifier}",
    params(
        ("identifier" = String, Path, description = "App id or slug")
    ),
    request_body = AppInputDto,
    responses(
        (status = 200, description = "App updated", body = ApiResponse<AppResponseDto>),
        (status = 400, description = "Missing or invalid fields, or unknown category"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "App not found"),
        (status = 409, description = "Slug already taken")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn update_app(
    State(service): State<Arc<AppService>>,
    Path(identifier): Path<String>,
    AppJson(dto): AppJson<AppInputDto>,
) -> Result<Json<ApiResponse<AppResponseDto>>> {
    let app = service.update(&identifier, dto).await?;
    Ok(Json(ApiResponse::success(Some(app), None, None)))
}

/// Delete an app
#[utoipa::path(
    delete,
    path = "/api/admin/apps/{identifier}",
    params(
        ("identifier" = String, Path, description = "App id or slug")
    ),
    responses(
        (status = 200, description = "App deleted", body = ApiResponse<AppResponseDto>),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "App not found")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn delete_app(
    State(service): State<Arc<AppService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<AppResponseDto>>> {
    let app = service.delete(&identifier).await?;
    Ok(Json(ApiResponse::success(
        Some(app),
        Some("App deleted".to_string()),
        None,
    )))
}
