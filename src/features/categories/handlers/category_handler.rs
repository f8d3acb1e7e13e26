use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryInputDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List all categories
///
/// Returns a flat list ordered by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// Get category by id or slug
#[utoipa::path(
    get,
    path = "/api/categories/{identifier}",
    params(
        ("identifier" = String, Path, description = "Category id or slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(&identifier).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CategoryInputDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 409, description = "Slug already taken")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

/// Replace a category
#[utoipa::path(
    put,
    path = "/api/admin/categories/{identifier}",
    params(
        ("identifier" = String, Path, description = "Category id or slug")
    ),
    request_body = CategoryInputDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug already taken")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(identifier): Path<String>,
    AppJson(dto): AppJson<CategoryInputDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.update(&identifier, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category
///
/// Rejected with the dependent counts while apps or blog posts still use it.
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{identifier}",
    params(
        ("identifier" = String, Path, description = "Category id or slug")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Category still has apps or blog posts"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "Category not found")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.delete(&identifier).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category deleted".to_string()),
        None,
    )))
}
